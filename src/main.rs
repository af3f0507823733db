//! mtree - browse a flat object-storage listing as a folder tree

use std::io::stdout;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use mediatree::app::{run, Config};
use mediatree::integrate::exit_code;

/// Environment variable holding the log filter (e.g. `debug`, `mediatree=trace`)
const LOG_ENV: &str = "MTREE_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // Logs go to stderr so stdout stays machine-readable
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    init_logging();

    // Parse config first to return INVALID exit code for argument errors
    let config = match Config::from_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::INVALID as u8);
        }
    };

    let stdout = stdout();
    let mut handle = stdout.lock();
    match run(&config, &mut handle) {
        Ok(()) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}
