//! TUI mode for browsing movies and reviews.
//!
//! This module provides the entry point for the interactive terminal user
//! interface that lists, searches, and opens movies, and lets the configured
//! user manage their own reviews.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use marquee::telemetry::NoopTelemetrySink;
use marquee::tui::{
    BrowseApp, BrowseContext, ReviewDraftConfig, set_browse_context, set_initial_terminal_size,
    set_review_draft_config,
};
use marquee::{ApiError, MarqueeConfig};

use super::catalogue_for;

/// Runs the TUI mode for browsing movies.
///
/// # Errors
///
/// Returns an error if:
/// - The API URL is invalid
/// - The HTTP client cannot be built
/// - The TUI fails to initialise
pub async fn run(config: &MarqueeConfig) -> Result<(), ApiError> {
    let catalogue = catalogue_for(config, Arc::new(NoopTelemetrySink))?;
    let user = config.current_user();
    if user.is_none() {
        tracing::info!("no user configured; browsing read-only");
    }

    // Startup values are read by `BrowseApp::init()`. If already set (e.g.
    // re-running the TUI in the same process), the existing values remain.
    let _context_set = set_browse_context(BrowseContext { catalogue, user });
    let _config_set = set_review_draft_config(ReviewDraftConfig::new(
        config.review_max_length,
        config.review_templates.clone(),
    ));
    if let Ok((width, height)) = crossterm::terminal::size() {
        let _size_set = set_initial_terminal_size(width, height);
    }

    run_tui().await.map_err(|error| ApiError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Runs the bubbletea-rs program with the `BrowseApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<BrowseApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
