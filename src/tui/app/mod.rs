//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state for the movie browser.
//! It coordinates the list and detail views, issues API requests as
//! commands, and reconciles their responses with the current state.
//!
//! # Module Structure
//!
//! - `model_impl`: `bubbletea_rs::Model` implementation and viewport shaping
//! - `routing`: view-mode routing and category dispatch
//! - `navigation`, `layout`: cursor movement and scrolling
//! - `search_handlers`: search form and pagination
//! - `data_handlers`: request commands and response application
//! - `detail_handlers`: opening movies and deleting reviews
//! - `review_draft_handlers`: creating and editing reviews
//! - `lifecycle_handlers`: startup, resize, help, and quit
//! - `rendering`: header, search bar, status bar, and help overlay

use crate::api::{MovieCatalogue, MovieSummary, User};

use super::components::MovieListComponent;
use super::review_draft_config::ReviewDraftConfig;
use super::state::{MovieDetailState, ReviewDraftState, SearchState};

mod data_handlers;
mod detail_handlers;
mod layout;
mod lifecycle_handlers;
mod model_impl;
mod navigation;
mod rendering;
mod review_draft_handlers;
mod routing;
mod search_handlers;
mod view_mode;

pub(crate) use view_mode::{
    CHROME_HEIGHT, DETAIL_CHROME_HEIGHT, ListFocus, MIN_LIST_HEIGHT, ViewMode,
};

/// Status message shown when the TUI starts without an API client.
const CATALOGUE_MISSING: &str = "Movie API client is not configured";

/// Main application model for the movie browser TUI.
#[derive(Debug)]
pub struct BrowseApp {
    /// API access; `None` reports every request as unconfigured.
    catalogue: Option<MovieCatalogue>,
    /// Signed-in user; `None` hides review actions.
    user: Option<User>,
    /// Search form, applied search, and page.
    pub(crate) search: SearchState,
    /// Movies on the displayed page.
    movies: Vec<MovieSummary>,
    /// Page number reported with the displayed movies.
    shown_page: u32,
    /// Page size reported with the displayed movies.
    entries_per_page: u32,
    /// Cursor position in the movie list.
    cursor_position: usize,
    /// First visible row of the movie list.
    scroll_offset: usize,
    /// Detail view state.
    pub(crate) detail: MovieDetailState,
    /// Open review draft, if any.
    pub(crate) review_draft: Option<ReviewDraftState>,
    /// Draft length limit and templates.
    review_draft_config: ReviewDraftConfig,
    /// Active view.
    view_mode: ViewMode,
    /// Focused search input in the list view.
    list_focus: ListFocus,
    /// Whether a request for the active view is in flight.
    pub(crate) loading: bool,
    /// Current error message, if any.
    pub(crate) error: Option<String>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Whether the startup message has been handled.
    has_initialized: bool,
    /// Whether a review save or delete is awaiting the server.
    review_action_pending: bool,
    /// Movie list component.
    movie_list: MovieListComponent,
}

impl BrowseApp {
    /// Creates an application that talks to the API through `catalogue`.
    #[must_use]
    pub fn new(catalogue: Option<MovieCatalogue>, user: Option<User>) -> Self {
        let (width, height) = super::get_initial_terminal_size();
        let mut app = Self {
            catalogue,
            user,
            search: SearchState::new(),
            movies: Vec::new(),
            shown_page: 0,
            entries_per_page: 0,
            cursor_position: 0,
            scroll_offset: 0,
            detail: MovieDetailState::new(),
            review_draft: None,
            review_draft_config: super::get_review_draft_config(),
            view_mode: ViewMode::MovieList,
            list_focus: ListFocus::Results,
            loading: false,
            error: None,
            width,
            height,
            show_help: false,
            has_initialized: false,
            review_action_pending: false,
            movie_list: MovieListComponent::new(),
        };
        app.set_visible_list_height();
        app
    }

    /// Creates an application with no API client, for rendering tests.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(None, None)
    }

    /// Replaces the review-drafting configuration.
    #[must_use]
    pub fn with_review_draft_config(mut self, config: ReviewDraftConfig) -> Self {
        self.review_draft_config = ReviewDraftConfig::new(config.max_length, config.templates);
        self
    }

    /// Returns the movies on the displayed page.
    #[must_use]
    pub fn movies(&self) -> &[MovieSummary] {
        &self.movies
    }

    /// Returns the page number reported with the displayed movies.
    #[must_use]
    pub const fn shown_page(&self) -> u32 {
        self.shown_page
    }

    /// Returns the page size reported with the displayed movies.
    #[must_use]
    pub const fn entries_per_page(&self) -> u32 {
        self.entries_per_page
    }

    /// Returns the current list cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Returns the movie under the list cursor, if any.
    #[must_use]
    pub fn selected_movie(&self) -> Option<&MovieSummary> {
        self.movies.get(self.cursor_position)
    }

    /// Returns the current error message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns true while the detail view is active.
    #[must_use]
    pub fn is_showing_detail(&self) -> bool {
        self.view_mode == ViewMode::MovieDetail
    }

    /// Returns the signed-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Replaces the displayed page and resets the list cursor.
    fn show_movies(&mut self, movies: Vec<MovieSummary>, page: u32, entries_per_page: u32) {
        self.movies = movies;
        self.shown_page = page;
        self.entries_per_page = entries_per_page;
        self.cursor_position = 0;
        self.scroll_offset = 0;
        self.set_visible_list_height();
    }
}

#[cfg(test)]
mod test_support;
