//! CLI operation mode handlers.
//!
//! This module contains the implementations for different operation modes:
//! - [`browse_tui`]: Interactive TUI for browsing movies and reviews
//! - [`movie_listing`]: Print one page of movies
//! - [`movie_detail`]: Print a movie with its reviews
//! - [`ratings`]: Print the rating labels offered by the server
//!
//! Output formatting utilities are in [`output`]; subscriber setup is in
//! [`logging`].

use std::sync::Arc;

use marquee::telemetry::TelemetrySink;
use marquee::{ApiError, MarqueeConfig, MovieCatalogue};

pub mod browse_tui;
pub mod logging;
pub mod movie_detail;
pub mod movie_listing;
pub mod output;
pub mod ratings;

/// Builds the HTTP-backed catalogue described by `config`.
///
/// # Errors
///
/// Returns [`ApiError::InvalidUrl`] when the API URL is unusable, or
/// [`ApiError::Configuration`] when the HTTP client cannot be built.
pub fn catalogue_for(
    config: &MarqueeConfig,
    telemetry: Arc<dyn TelemetrySink>,
) -> Result<MovieCatalogue, ApiError> {
    let base_url = config.resolve_api_url()?;
    MovieCatalogue::http(base_url, config.request_timeout(), telemetry)
}
