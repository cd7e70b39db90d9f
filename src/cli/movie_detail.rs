//! One-shot movie detail.

use std::io;
use std::sync::Arc;

use marquee::telemetry::StderrJsonlTelemetrySink;
use marquee::{ApiError, MarqueeConfig};

use super::catalogue_for;
use super::output::write_movie_detail_to;

/// Prints the movie named by `--movie-id` together with its reviews.
///
/// # Errors
///
/// Returns [`ApiError::Configuration`] when no movie id is configured, or
/// the [`ApiError`] raised while fetching or writing the movie.
pub async fn run(config: &MarqueeConfig) -> Result<(), ApiError> {
    let movie_id = config.require_movie_id()?;
    let catalogue = catalogue_for(config, Arc::new(StderrJsonlTelemetrySink))?;
    let movie = catalogue.movie(&movie_id).await?;

    let mut stdout = io::stdout().lock();
    write_movie_detail_to(&mut stdout, &movie)
}
