mod app;
mod cli;
mod error;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use dock_observe::logger_init;

use crate::cli::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logger_init(&args.logger_config()) {
        eprintln!("docker-connector: {e}");
        return ExitCode::FAILURE;
    }

    match app::run(args).await {
        Ok(()) => {
            info!("session closed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
