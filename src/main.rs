//! Marquee CLI entrypoint: browse movies and reviews from the terminal.

use std::io::{self, Write};
use std::process::ExitCode;

use marquee::{ApiError, MarqueeConfig, OperationMode};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ApiError> {
    let config = load_config()?;
    cli::logging::init(&config)?;

    match config.operation_mode() {
        OperationMode::BrowseTui => cli::browse_tui::run(&config).await,
        OperationMode::MovieDetail => cli::movie_detail::run(&config).await,
        OperationMode::RatingList => cli::ratings::run(&config).await,
        OperationMode::MovieListing => cli::movie_listing::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ApiError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<MarqueeConfig, ApiError> {
    MarqueeConfig::load().map_err(|error| ApiError::Configuration {
        message: error.to_string(),
    })
}
