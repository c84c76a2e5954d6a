use std::process::ExitCode;

use clap::Parser;
use gameshaper::cli::{self, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();

    // Keep the guard alive so file logs are flushed on exit
    let _log_guard = gameshaper::core::logging::init(args.verbose);
    log::info!("{} v{} starting", gameshaper::NAME, gameshaper::VERSION);

    match cli::execute(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
