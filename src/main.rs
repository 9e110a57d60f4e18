//! Codetrail CLI entry point.

use tracing_subscriber::{fmt, EnvFilter};

use codetrail::cli::{self, Cli};

fn main() {
    let cli = Cli::parse_args();

    // Initialize tracing; RUST_LOG overrides the flag-derived default.
    let default_level = if cli.debug {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
