use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::error;

use crate::cli::App;
use crate::error::ConfigError;

mod cli;
mod config;
mod error;
mod logging;
mod run;
mod ui;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let app = App::parse();
    logging::init(app.verbose);

    match run::run(app).await {
        Ok(summary) => {
            tracing::info!("{summary}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err:#}");
            if let Some(ConfigError::OutputNotDirectory(_)) = err.downcast_ref::<ConfigError>() {
                let _ = App::command().print_help();
            }
            ExitCode::FAILURE
        }
    }
}
