//! One-shot movie listing.

use std::io;
use std::sync::Arc;

use marquee::telemetry::StderrJsonlTelemetrySink;
use marquee::{ApiError, MarqueeConfig};

use super::catalogue_for;
use super::output::write_movie_page_to;

/// Prints the page of movies selected by `--title`, `--rated`, and `--page`.
///
/// # Errors
///
/// Returns the [`ApiError`] raised while configuring the client, fetching
/// the page, or writing it out.
pub async fn run(config: &MarqueeConfig) -> Result<(), ApiError> {
    let catalogue = catalogue_for(config, Arc::new(StderrJsonlTelemetrySink))?;
    let query = config.listing_query();
    let page = catalogue.list_movies(&query).await?;

    let mut stdout = io::stdout().lock();
    write_movie_page_to(&mut stdout, &page, &query)
}
