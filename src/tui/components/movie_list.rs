//! Movie list component for one page of listing results.
//!
//! This component renders a scrollable window over the movies on the current
//! page with cursor highlighting, followed by the pagination footer.

use crate::api::MovieSummary;

use super::text_wrap::truncate_to_width;

/// Default visible height for the movie list component.
const DEFAULT_VISIBLE_HEIGHT: usize = 20;

/// Rows used by the pagination footer below the list.
pub(crate) const FOOTER_HEIGHT: usize = 2;

/// Context for rendering the movie list view.
#[derive(Debug, Clone)]
pub struct MovieListViewContext<'a> {
    /// Movies on the displayed page.
    pub movies: &'a [MovieSummary],
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Number of rows scrolled from top.
    pub scroll_offset: usize,
    /// Maximum visible height in rows.
    pub visible_height: usize,
    /// Available terminal width.
    pub max_width: usize,
    /// Page number reported by the server for the displayed movies.
    pub page: u32,
    /// Page size reported by the server.
    pub entries_per_page: u32,
}

/// Component for displaying a page of movies.
#[derive(Debug, Clone)]
pub struct MovieListComponent {
    /// Visible height in rows (for scrolling calculations).
    visible_height: usize,
}

impl Default for MovieListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieListComponent {
    /// Creates a new movie list component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible height for scrolling calculations.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Returns the visible height.
    #[must_use]
    pub const fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Renders the movie list as a string.
    ///
    /// Only movies inside the visible window are rendered. The pagination
    /// footer appears only when the page has movies.
    #[must_use]
    pub fn view(&self, ctx: &MovieListViewContext<'_>) -> String {
        if ctx.movies.is_empty() {
            return "  No movies on this page.\n".to_owned();
        }

        let visible_height = if ctx.visible_height > 0 {
            ctx.visible_height
        } else {
            self.visible_height
        };

        let mut output = String::new();
        for (index, movie) in ctx
            .movies
            .iter()
            .enumerate()
            .skip(ctx.scroll_offset)
            .take(visible_height)
        {
            let prefix = if index == ctx.cursor_position { ">" } else { " " };
            let line = format_movie_line(movie, prefix);
            output.push_str(&truncate_to_width(&line, ctx.max_width));
            output.push('\n');
        }

        output.push_str(&format!("Showing Page: {}\n", ctx.page));
        output.push_str(&format!("n: Get next {} results\n", ctx.entries_per_page));
        output
    }
}

/// Formats a single movie row: title, rating, thumbnail URL, and plot.
///
/// The plot is flattened onto the row and cut off by the row truncation.
fn format_movie_line(movie: &MovieSummary, prefix: &str) -> String {
    let rated = movie
        .rated
        .as_deref()
        .map_or_else(String::new, |rating| format!(" [{rating}]"));
    let poster = movie
        .poster_thumbnail()
        .map_or_else(String::new, |url| format!("  {url}"));
    let plot = movie
        .plot
        .as_deref()
        .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|text| !text.is_empty())
        .map_or_else(String::new, |text| format!("  - {text}"));

    format!("{prefix} {}{rated}{poster}{plot}", movie.title)
}
