//! Search and pagination state for the movie list.
//!
//! Form inputs are kept apart from the search that is actually applied:
//! typing into the title box or moving the rating selector never fetches.
//! Committing a search or advancing the page changes the applied search,
//! bumps the generation, and yields exactly one [`SearchRequest`].

use crate::api::{MovieQuery, SearchField};

/// Rating selector entry that clears the rating filter.
pub const ALL_RATINGS: &str = "All Ratings";

/// The search currently driving the movie list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppliedSearch {
    /// Unfiltered listing.
    #[default]
    None,
    /// Title search; the string is sent verbatim, even when empty.
    Title(String),
    /// Rating filter.
    Rating(String),
}

impl AppliedSearch {
    /// Returns a human-readable label for display in the UI.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::None => "All movies".to_owned(),
            Self::Title(title) => format!("Title: \"{title}\""),
            Self::Rating(rating) => format!("Rated: {rating}"),
        }
    }
}

/// A list request tagged with the generation that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Query to send.
    pub query: MovieQuery,
    /// Generation of the search state when the request was issued.
    pub tag: u64,
}

/// Form inputs, applied search, and page for the movie list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    title_input: String,
    rating_input: String,
    rating_options: Vec<String>,
    applied: AppliedSearch,
    page: u32,
    generation: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    /// Creates an unfiltered search on page zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title_input: String::new(),
            rating_input: ALL_RATINGS.to_owned(),
            rating_options: vec![ALL_RATINGS.to_owned()],
            applied: AppliedSearch::None,
            page: 0,
            generation: 0,
        }
    }

    /// Returns the uncommitted title input.
    #[must_use]
    pub const fn title_input(&self) -> &str {
        self.title_input.as_str()
    }

    /// Returns the uncommitted rating selection.
    #[must_use]
    pub const fn rating_input(&self) -> &str {
        self.rating_input.as_str()
    }

    /// Returns the selectable ratings, starting with [`ALL_RATINGS`].
    #[must_use]
    pub fn rating_options(&self) -> &[String] {
        &self.rating_options
    }

    /// Returns the applied search.
    #[must_use]
    pub const fn applied(&self) -> &AppliedSearch {
        &self.applied
    }

    /// Returns the requested page.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the current generation.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the title input without issuing a request.
    pub fn set_title_input(&mut self, text: impl Into<String>) {
        self.title_input = text.into();
    }

    /// Appends one character to the title input.
    pub fn push_title_char(&mut self, character: char) {
        self.title_input.push(character);
    }

    /// Removes the last character of the title input, if any.
    pub fn pop_title_char(&mut self) {
        self.title_input.pop();
    }

    /// Replaces the rating selection without issuing a request.
    pub fn set_rating_input(&mut self, label: impl Into<String>) {
        self.rating_input = label.into();
    }

    /// Installs the server's rating labels behind the [`ALL_RATINGS`] entry.
    ///
    /// A selection that no longer exists falls back to [`ALL_RATINGS`].
    pub fn set_rating_labels(&mut self, labels: Vec<String>) {
        let mut options = Vec::with_capacity(labels.len().saturating_add(1));
        options.push(ALL_RATINGS.to_owned());
        options.extend(labels.into_iter().filter(|label| label != ALL_RATINGS));
        self.rating_options = options;

        if !self.rating_options.contains(&self.rating_input) {
            self.rating_input = ALL_RATINGS.to_owned();
        }
    }

    /// Moves the rating selection forward, wrapping at the end.
    pub fn select_next_rating(&mut self) {
        self.step_rating(true);
    }

    /// Moves the rating selection backward, wrapping at the start.
    pub fn select_previous_rating(&mut self) {
        self.step_rating(false);
    }

    fn step_rating(&mut self, forward: bool) {
        let count = self.rating_options.len();
        if count == 0 {
            return;
        }
        let current = self
            .rating_options
            .iter()
            .position(|option| option == &self.rating_input)
            .unwrap_or(0);
        let next = if forward {
            current.saturating_add(1).checked_rem(count).unwrap_or(0)
        } else {
            current.checked_sub(1).unwrap_or(count.saturating_sub(1))
        };
        if let Some(label) = self.rating_options.get(next) {
            self.rating_input.clone_from(label);
        }
    }

    /// Applies the title input as a title search on page zero.
    ///
    /// Any prior rating filter is replaced.
    pub fn commit_title_search(&mut self) -> SearchRequest {
        self.applied = AppliedSearch::Title(self.title_input.clone());
        self.page = 0;
        self.advance()
    }

    /// Applies the rating selection on page zero.
    ///
    /// Selecting [`ALL_RATINGS`] clears the filter.
    pub fn commit_rating_search(&mut self) -> SearchRequest {
        self.applied = if self.rating_input == ALL_RATINGS {
            AppliedSearch::None
        } else {
            AppliedSearch::Rating(self.rating_input.clone())
        };
        self.page = 0;
        self.advance()
    }

    /// Advances to the next page of the applied search.
    ///
    /// There is no upper bound: a page past the end yields an empty list.
    pub fn next_page(&mut self) -> SearchRequest {
        self.page = self.page.saturating_add(1);
        self.advance()
    }

    /// Returns the query matching the applied search and page.
    #[must_use]
    pub fn request(&self) -> MovieQuery {
        match &self.applied {
            AppliedSearch::None => MovieQuery::all(self.page),
            AppliedSearch::Title(title) => {
                MovieQuery::by_field(SearchField::Title, title.clone(), self.page)
            }
            AppliedSearch::Rating(rating) => {
                MovieQuery::by_field(SearchField::Rated, rating.clone(), self.page)
            }
        }
    }

    /// Returns the request for the current state without changing it.
    ///
    /// Used for the initial load and for reloading after an error.
    #[must_use]
    pub fn current_request(&self) -> SearchRequest {
        SearchRequest {
            query: self.request(),
            tag: self.generation,
        }
    }

    /// Returns true when a response tagged `tag` still matches this state.
    #[must_use]
    pub const fn accepts(&self, tag: u64) -> bool {
        tag == self.generation
    }

    fn advance(&mut self) -> SearchRequest {
        self.generation = self.generation.wrapping_add(1);
        self.current_request()
    }
}
