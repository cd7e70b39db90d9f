//! Shared view-mode and layout constants for the browse TUI.

/// Layout rows reserved for header, two search-bar rows, and status bar.
pub(crate) const CHROME_HEIGHT: usize = 4;
/// Layout rows reserved in the detail view for header and status bar.
pub(crate) const DETAIL_CHROME_HEIGHT: usize = 2;
/// Minimum rows for the movie list, ensuring at least one row is visible
/// even when the terminal height is very small.
pub(crate) const MIN_LIST_HEIGHT: usize = 1;

/// Tracks which view is currently active in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewMode {
    MovieList,
    MovieDetail,
}

/// Which search input, if any, has focus in the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListFocus {
    Results,
    TitleInput,
    RatingSelect,
}
