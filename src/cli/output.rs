//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use marquee::{ApiError, Movie, MoviePage, MovieQuery};

/// Writes one page of movies to the given writer.
///
/// # Errors
///
/// Returns [`ApiError::Io`] when writing fails.
pub fn write_movie_page_to<W: Write>(
    writer: &mut W,
    page: &MoviePage,
    query: &MovieQuery,
) -> Result<(), ApiError> {
    let heading = query.filter().map_or_else(
        || "Movies".to_owned(),
        |(field, value)| format!("Movies where {} is \"{value}\"", field.as_param()),
    );
    writeln!(writer, "{heading} (page {}):", page.page).map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    if page.movies.is_empty() {
        writeln!(writer, "  No movies on this page.").map_err(|e| io_error(&e))?;
        return Ok(());
    }

    for movie in &page.movies {
        let rated = movie.rated.as_deref().unwrap_or("unrated");
        writeln!(writer, "  {}  {} [{rated}]", movie.id, movie.title).map_err(|e| io_error(&e))?;
    }

    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Showing {} movies, {} per page. Use --page {} for more.",
        page.movies.len(),
        page.entries_per_page,
        page.page.saturating_add(1)
    )
    .map_err(|e| io_error(&e))
}

/// Writes a movie and its reviews to the given writer.
///
/// # Errors
///
/// Returns [`ApiError::Io`] when writing fails.
pub fn write_movie_detail_to<W: Write>(writer: &mut W, movie: &Movie) -> Result<(), ApiError> {
    writeln!(writer, "{}", movie.title).map_err(|e| io_error(&e))?;
    if let Some(rated) = movie.rated.as_deref() {
        writeln!(writer, "Rating: {rated}").map_err(|e| io_error(&e))?;
    }
    if let Some(poster) = movie.poster_detail() {
        writeln!(writer, "Poster: {poster}").map_err(|e| io_error(&e))?;
    }
    if let Some(plot) = movie.plot.as_deref() {
        writeln!(writer, "{plot}").map_err(|e| io_error(&e))?;
    }

    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(writer, "Reviews:").map_err(|e| io_error(&e))?;
    if movie.reviews.is_empty() {
        return writeln!(writer, "  No reviews yet.").map_err(|e| io_error(&e));
    }
    for review in &movie.reviews {
        writeln!(
            writer,
            "  {} reviewed on {}",
            review.author,
            review.formatted_date()
        )
        .map_err(|e| io_error(&e))?;
        writeln!(writer, "    {}", review.body).map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes the rating labels, one per line.
///
/// # Errors
///
/// Returns [`ApiError::Io`] when writing fails.
pub fn write_ratings_to<W: Write>(writer: &mut W, ratings: &[String]) -> Result<(), ApiError> {
    if ratings.is_empty() {
        return writeln!(writer, "No ratings available.").map_err(|e| io_error(&e));
    }
    for rating in ratings {
        writeln!(writer, "{rating}").map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Converts an I/O error into an `ApiError::Io`.
pub fn io_error(error: &io::Error) -> ApiError {
    ApiError::Io {
        message: error.to_string(),
    }
}
