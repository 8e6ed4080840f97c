use anyhow::Result;
use clap::Parser;
use charger_uptime::{cli::Cli, output, parser, uptime, StationReports, UptimeError};
use std::io;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Parse the input, falling back to an empty station set on failure
///
/// The failure is reported on stderr; the caller then takes the
/// "no stations" path.
fn load_stations(path: &std::path::Path) -> StationReports {
    match parser::parse_file(path) {
        Ok(stations) => stations,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to parse input");
            eprintln!("Error reading file: {}", err);
            StationReports::new()
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let [path] = args.paths.as_slice() else {
        println!("Error");
        eprintln!(
            "[WARNING] charger-uptime {}\nUsage: charger-uptime <PATH>",
            UptimeError::Usage
        );
        return Ok(());
    };

    let stations = load_stations(path);
    if stations.is_empty() {
        println!("Error");
        return Ok(());
    }

    let result = uptime::calculate_uptime(&stations);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::write_report(&mut out, &result, args.format, args.summary)?;

    if args.summary {
        output::print_summary(&result);
    }

    Ok(())
}
