//! One-shot rating label listing.

use std::io;
use std::sync::Arc;

use marquee::telemetry::StderrJsonlTelemetrySink;
use marquee::{ApiError, MarqueeConfig};

use super::catalogue_for;
use super::output::write_ratings_to;

/// Prints the rating labels the server offers for filtering.
///
/// # Errors
///
/// Returns the [`ApiError`] raised while fetching or writing the labels.
pub async fn run(config: &MarqueeConfig) -> Result<(), ApiError> {
    let catalogue = catalogue_for(config, Arc::new(StderrJsonlTelemetrySink))?;
    let ratings = catalogue.ratings().await?;

    let mut stdout = io::stdout().lock();
    write_ratings_to(&mut stdout, &ratings)
}
