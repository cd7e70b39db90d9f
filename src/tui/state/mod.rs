//! State management for the movie browser TUI.
//!
//! This module provides the state types behind each view: search and
//! pagination for the movie list, the loaded movie for the detail view, and
//! the review draft editor.

mod movie_detail;
mod review_draft;
mod search_state;

pub use movie_detail::MovieDetailState;
pub use review_draft::{
    ReviewDraftError, ReviewDraftMode, ReviewDraftState, ReviewTemplateError,
    render_review_template,
};
pub use search_state::{ALL_RATINGS, AppliedSearch, SearchRequest, SearchState};
