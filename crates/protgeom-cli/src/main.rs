mod cli;
mod config;
mod error;
mod logging;
mod runner;
mod utils;

use crate::cli::Cli;
use crate::error::Result;
use clap::Parser;
use tracing::{debug, info};

fn main() {
    let result = run_app();
    if let Err(e) = &result {
        eprintln!("Error: {}", e);
    }
    std::process::exit(error::exit_code(&result));
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!(
        "analyze-protein v{} starting up.",
        env!("CARGO_PKG_VERSION")
    );
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runner::execute(&cli, &mut out, &mut std::io::stderr())
}
