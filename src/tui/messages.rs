//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the
//! application's update function. Messages represent user actions, async
//! command results, and system events.

use crate::api::{ApiError, Movie, MovieId, MoviePage, ReviewId, ReviewSubmission};

/// Messages for the movie browser TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one item.
    CursorUp,
    /// Move cursor down one item.
    CursorDown,
    /// Move cursor up one page.
    PageUp,
    /// Move cursor down one page.
    PageDown,
    /// Move cursor to first item.
    Home,
    /// Move cursor to last item.
    End,

    // Search form
    /// Focus the title search input.
    FocusTitleSearch,
    /// Append a character to the title input.
    TitleInputChar(char),
    /// Remove the last character of the title input.
    TitleInputBackspace,
    /// Apply the title input as the active search.
    CommitTitleSearch,
    /// Focus the rating selector.
    FocusRatingSelect,
    /// Select the next rating label.
    RatingSelectNext,
    /// Select the previous rating label.
    RatingSelectPrevious,
    /// Apply the selected rating as the active search.
    CommitRatingSearch,
    /// Leave the focused input without applying it.
    CancelInput,
    /// Request the next page of the applied search.
    NextPage,

    // Data loading
    /// Re-issue the request for the current view.
    ReloadRequested,
    /// Ratings and the first page arrived together at startup.
    StartupLoaded {
        /// Rating labels, or the error that prevented loading them.
        ratings: Result<Vec<String>, ApiError>,
        /// First movie page, or the error that prevented loading it.
        movies: Result<MoviePage, ApiError>,
        /// Search generation the page request was issued for.
        tag: u64,
    },
    /// A movie page arrived.
    MoviesLoaded {
        /// Page contents.
        page: MoviePage,
        /// Search generation the request was issued for.
        tag: u64,
    },
    /// A movie page request failed.
    MoviesFailed {
        /// Failure reported by the API layer.
        error: ApiError,
        /// Search generation the request was issued for.
        tag: u64,
    },
    /// A movie with its reviews arrived.
    MovieLoaded {
        /// Loaded movie.
        movie: Movie,
        /// Detail generation the request was issued for.
        tag: u64,
    },
    /// A movie request failed.
    MovieFailed {
        /// Failure reported by the API layer.
        error: ApiError,
        /// Detail generation the request was issued for.
        tag: u64,
    },

    // Detail view
    /// Open the movie under the list cursor.
    OpenSelectedMovie,
    /// Return from the detail view to the list.
    CloseDetail,
    /// Delete the review under the detail cursor.
    DeleteSelectedReview,
    /// A review delete succeeded.
    ReviewDeleted {
        /// Movie the review belonged to.
        movie_id: MovieId,
        /// Deleted review.
        review_id: ReviewId,
        /// Position the review had when the delete was requested.
        index: usize,
    },
    /// A review create, update, or delete failed.
    ReviewActionFailed(ApiError),

    // Review drafting
    /// Open an empty draft for a new review.
    StartReviewDraft,
    /// Open a draft pre-filled with the review under the detail cursor.
    EditSelectedReview,
    /// Insert the template at `template_index` into the draft.
    DraftInsertTemplate {
        /// Zero-based template slot.
        template_index: usize,
    },
    /// Append a character to the draft.
    DraftInsertChar(char),
    /// Remove the last character of the draft.
    DraftBackspace,
    /// Erase the whole draft text.
    DraftClear,
    /// Validate and send the draft.
    DraftSubmit,
    /// Discard the draft.
    DraftCancel,
    /// The server accepted a drafted review.
    ReviewSaved(ReviewSubmission),

    // Application lifecycle
    /// Startup message emitted once by `init()`.
    Initialized,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true if this is a cursor navigation message.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::PageUp
                | Self::PageDown
                | Self::Home
                | Self::End
        )
    }

    /// Returns true if this message edits or applies the search form.
    #[must_use]
    pub const fn is_search(&self) -> bool {
        matches!(
            self,
            Self::FocusTitleSearch
                | Self::TitleInputChar(_)
                | Self::TitleInputBackspace
                | Self::CommitTitleSearch
                | Self::FocusRatingSelect
                | Self::RatingSelectNext
                | Self::RatingSelectPrevious
                | Self::CommitRatingSearch
                | Self::CancelInput
                | Self::NextPage
        )
    }

    /// Returns true if this message starts or completes an API load.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::ReloadRequested
                | Self::StartupLoaded { .. }
                | Self::MoviesLoaded { .. }
                | Self::MoviesFailed { .. }
                | Self::MovieLoaded { .. }
                | Self::MovieFailed { .. }
        )
    }

    /// Returns true if this message belongs to the detail view.
    #[must_use]
    pub const fn is_detail(&self) -> bool {
        matches!(
            self,
            Self::OpenSelectedMovie
                | Self::CloseDetail
                | Self::DeleteSelectedReview
                | Self::ReviewDeleted { .. }
                | Self::ReviewActionFailed(_)
        )
    }

    /// Returns true if this message edits or submits a review draft.
    #[must_use]
    pub const fn is_review_draft(&self) -> bool {
        matches!(
            self,
            Self::StartReviewDraft
                | Self::EditSelectedReview
                | Self::DraftInsertTemplate { .. }
                | Self::DraftInsertChar(_)
                | Self::DraftBackspace
                | Self::DraftClear
                | Self::DraftSubmit
                | Self::DraftCancel
                | Self::ReviewSaved(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::AppMsg;
    use crate::api::ApiError;

    #[rstest]
    #[case::cursor(AppMsg::CursorDown, "navigation")]
    #[case::commit(AppMsg::CommitTitleSearch, "search")]
    #[case::next_page(AppMsg::NextPage, "search")]
    #[case::failed(
        AppMsg::MoviesFailed { error: ApiError::Network { message: "down".to_owned() }, tag: 1 },
        "data"
    )]
    #[case::delete(AppMsg::DeleteSelectedReview, "detail")]
    #[case::draft(AppMsg::DraftSubmit, "review_draft")]
    #[case::quit(AppMsg::Quit, "lifecycle")]
    fn each_message_has_one_category(#[case] msg: AppMsg, #[case] expected: &str) {
        let categories = [
            ("navigation", msg.is_navigation()),
            ("search", msg.is_search()),
            ("data", msg.is_data()),
            ("detail", msg.is_detail()),
            ("review_draft", msg.is_review_draft()),
        ];
        let matched: Vec<_> = categories
            .iter()
            .filter(|(_, hit)| *hit)
            .map(|(name, _)| *name)
            .collect();

        if expected == "lifecycle" {
            assert!(matched.is_empty(), "{msg:?} matched {matched:?}");
        } else {
            assert_eq!(matched, vec![expected], "{msg:?}");
        }
    }
}
