#![no_main]

use charger_uptime::{calculate_uptime, parse_str};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parsing and aggregation must not panic on any UTF-8 input
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(stations) = parse_str(input) {
            let _ = calculate_uptime(&stations);
        }
    }
});
