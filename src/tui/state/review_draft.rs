//! Review draft state and template rendering helpers for the browse TUI.
//!
//! A draft is opened either to write a new review for a movie or to edit an
//! existing one. It enforces a maximum character count and turns into a
//! [`ReviewSubmission`] once the text is non-empty.

use minijinja::{Environment, context};
use thiserror::Error;

use crate::api::{Movie, MovieId, NewReview, Review, ReviewId, ReviewSubmission, ReviewUpdate, User};

/// Whether a draft creates a review or replaces an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewDraftMode {
    /// Draft for a new review.
    Create,
    /// Draft replacing the review with this id.
    Edit(ReviewId),
}

/// Editable review text for one movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraftState {
    movie_id: MovieId,
    mode: ReviewDraftMode,
    text: String,
    max_length: usize,
}

impl ReviewDraftState {
    /// Creates an empty draft for a new review of `movie_id`.
    #[must_use]
    pub fn create(movie_id: MovieId, max_length: usize) -> Self {
        debug_assert!(
            max_length >= 1,
            "review draft max_length must be normalised before state creation"
        );
        Self {
            movie_id,
            mode: ReviewDraftMode::Create,
            text: String::new(),
            max_length,
        }
    }

    /// Creates a draft pre-filled with the body of `review`.
    ///
    /// The body is kept even when it is longer than `max_length`; further
    /// typing is refused until it is shortened.
    #[must_use]
    pub fn edit(movie_id: MovieId, review: &Review, max_length: usize) -> Self {
        Self {
            movie_id,
            mode: ReviewDraftMode::Edit(review.id.clone()),
            text: review.body.clone(),
            max_length,
        }
    }

    /// Returns the movie the draft belongs to.
    #[must_use]
    pub const fn movie_id(&self) -> &MovieId {
        &self.movie_id
    }

    /// Returns whether the draft creates or edits a review.
    #[must_use]
    pub const fn mode(&self) -> &ReviewDraftMode {
        &self.mode
    }

    /// Returns the current draft text.
    #[must_use]
    pub const fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Returns the configured maximum character count.
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// Returns the current character count using Unicode scalar values.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns remaining characters before the draft reaches its limit.
    #[must_use]
    pub fn remaining_chars(&self) -> usize {
        self.max_length.saturating_sub(self.char_count())
    }

    /// Appends free-form text to the draft, enforcing max length.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewDraftError::LengthExceeded`] when appending `suffix`
    /// would exceed the configured maximum length.
    pub fn append_text(&mut self, suffix: &str) -> Result<(), ReviewDraftError> {
        if suffix.is_empty() {
            return Ok(());
        }

        let attempted = self.char_count().saturating_add(suffix.chars().count());
        self.ensure_within_limit(attempted)?;

        self.text.push_str(suffix);
        Ok(())
    }

    /// Appends one character to the draft, enforcing max length.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewDraftError::LengthExceeded`] when appending
    /// `character` would exceed the configured maximum length.
    pub fn push_char(&mut self, character: char) -> Result<(), ReviewDraftError> {
        let attempted = self.char_count().saturating_add(1);
        self.ensure_within_limit(attempted)?;

        self.text.push(character);
        Ok(())
    }

    /// Removes the last character from the draft, if present.
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Clears the draft text.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Validates the draft and builds the request that saves it for `user`.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewDraftError::EmptyDraft`] when the draft is empty or
    /// whitespace-only, or [`ReviewDraftError::LengthExceeded`] when an
    /// edited body is still over the limit.
    pub fn submission(&self, user: &User) -> Result<ReviewSubmission, ReviewDraftError> {
        if self.text.trim().is_empty() {
            return Err(ReviewDraftError::EmptyDraft);
        }
        self.ensure_within_limit(self.char_count())?;

        let submission = match &self.mode {
            ReviewDraftMode::Create => ReviewSubmission::Create(NewReview::new(
                self.movie_id.clone(),
                self.text.clone(),
                user,
            )),
            ReviewDraftMode::Edit(review_id) => ReviewSubmission::Update(ReviewUpdate::new(
                review_id.clone(),
                self.movie_id.clone(),
                self.text.clone(),
                user,
            )),
        };
        Ok(submission)
    }

    const fn ensure_within_limit(&self, attempted: usize) -> Result<(), ReviewDraftError> {
        if attempted > self.max_length {
            return Err(ReviewDraftError::LengthExceeded {
                attempted,
                max_length: self.max_length,
            });
        }
        Ok(())
    }
}

/// Errors raised while mutating or validating review drafts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewDraftError {
    /// The draft text would exceed the configured character limit.
    #[error("review length {attempted} exceeds configured limit {max_length}")]
    LengthExceeded {
        /// Character count after the attempted mutation.
        attempted: usize,
        /// Configured maximum character count.
        max_length: usize,
    },
    /// Saving was requested for an empty draft.
    #[error("review is empty")]
    EmptyDraft,
}

/// Errors raised while rendering a review template.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewTemplateError {
    /// The template source failed to parse.
    #[error("invalid review template syntax: {message}")]
    InvalidSyntax {
        /// Human-readable parser message from `MiniJinja`.
        message: String,
    },
    /// Rendering failed after successful parsing.
    #[error("review template rendering failed: {message}")]
    RenderFailed {
        /// Human-readable rendering failure from `MiniJinja`.
        message: String,
    },
}

/// Renders a review template for `movie`.
///
/// Templates can use the following variables:
/// - `title`
/// - `rated`
/// - `user`
/// - `movie_id`
///
/// # Errors
///
/// Returns [`ReviewTemplateError::InvalidSyntax`] when `template_source`
/// fails to parse, or [`ReviewTemplateError::RenderFailed`] when rendering
/// fails.
pub fn render_review_template(
    template_source: &str,
    movie: &Movie,
    user: Option<&User>,
) -> Result<String, ReviewTemplateError> {
    let mut environment = Environment::new();
    environment.set_auto_escape_callback(|_| minijinja::AutoEscape::None);

    environment
        .add_template("review", template_source)
        .map_err(|error| ReviewTemplateError::InvalidSyntax {
            message: error.to_string(),
        })?;

    let rated = movie.rated.clone().unwrap_or_else(|| "unrated".to_owned());
    let user_name = user.map_or_else(String::new, |signed_in| signed_in.name.clone());

    let template =
        environment
            .get_template("review")
            .map_err(|error| ReviewTemplateError::RenderFailed {
                message: error.to_string(),
            })?;

    template
        .render(context! {
            title => movie.title.as_str(),
            rated => rated,
            user => user_name,
            movie_id => movie.id.as_str(),
        })
        .map_err(|error| ReviewTemplateError::RenderFailed {
            message: error.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{
        ReviewDraftError, ReviewDraftMode, ReviewDraftState, ReviewTemplateError,
        render_review_template,
    };
    use crate::api::models::test_support::{movie_with_reviews, review_by};
    use crate::api::{Movie, MovieId, ReviewId, ReviewSubmission, User};

    #[fixture]
    fn alice() -> User {
        User::new("u1", "alice")
    }

    #[fixture]
    fn movie() -> Movie {
        Movie {
            rated: Some("R".to_owned()),
            ..movie_with_reviews("m1", "Heat", Vec::new())
        }
    }

    #[rstest]
    fn create_draft_starts_empty() {
        let draft = ReviewDraftState::create(MovieId::new("m1"), 60);

        assert_eq!(draft.mode(), &ReviewDraftMode::Create);
        assert_eq!(draft.text(), "");
        assert_eq!(draft.remaining_chars(), 60);
    }

    #[rstest]
    fn edit_draft_prefills_existing_body() {
        let review = review_by("r1", "u1", "alice", "Tense");
        let draft = ReviewDraftState::edit(MovieId::new("m1"), &review, 60);

        assert_eq!(draft.mode(), &ReviewDraftMode::Edit(ReviewId::new("r1")));
        assert_eq!(draft.text(), "Tense");
    }

    #[rstest]
    fn append_text_respects_max_length() {
        let mut draft = ReviewDraftState::create(MovieId::new("m1"), 10);

        let result = draft.append_text("hello world");

        assert_eq!(
            result,
            Err(ReviewDraftError::LengthExceeded {
                attempted: 11,
                max_length: 10,
            })
        );
        assert_eq!(draft.text(), "");
    }

    #[rstest]
    fn push_char_and_backspace_update_draft() {
        let mut draft = ReviewDraftState::create(MovieId::new("m1"), 10);

        assert!(draft.push_char('o').is_ok());
        assert!(draft.push_char('k').is_ok());
        draft.backspace();

        assert_eq!(draft.text(), "o");
    }

    #[rstest]
    #[case("abc", 3)]
    #[case("é", 1)]
    #[case("🎬🎬", 2)]
    fn char_count_uses_unicode_scalar_values(#[case] text: &str, #[case] expected: usize) {
        let mut draft = ReviewDraftState::create(MovieId::new("m1"), 20);
        assert!(draft.append_text(text).is_ok());

        assert_eq!(draft.char_count(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_drafts_cannot_be_submitted(alice: User, #[case] text: &str) {
        let mut draft = ReviewDraftState::create(MovieId::new("m1"), 20);
        assert!(draft.append_text(text).is_ok());

        assert_eq!(draft.submission(&alice), Err(ReviewDraftError::EmptyDraft));
    }

    #[rstest]
    fn create_submission_carries_author(alice: User) {
        let mut draft = ReviewDraftState::create(MovieId::new("m1"), 20);
        assert!(draft.append_text("Great").is_ok());

        let submission = draft.submission(&alice).expect("draft should submit");

        let ReviewSubmission::Create(review) = submission else {
            panic!("expected a create submission");
        };
        assert_eq!(review.movie_id, MovieId::new("m1"));
        assert_eq!(review.review, "Great");
        assert_eq!(review.name, "alice");
    }

    #[rstest]
    fn edit_submission_carries_review_id(alice: User) {
        let review = review_by("r7", "u1", "alice", "Good");
        let mut draft = ReviewDraftState::edit(MovieId::new("m1"), &review, 20);
        assert!(draft.append_text(" enough").is_ok());

        let submission = draft.submission(&alice).expect("draft should submit");

        let ReviewSubmission::Update(update) = submission else {
            panic!("expected an update submission");
        };
        assert_eq!(update.review_id, ReviewId::new("r7"));
        assert_eq!(update.review, "Good enough");
    }

    #[rstest]
    fn oversized_edit_cannot_be_submitted(alice: User) {
        let review = review_by("r7", "u1", "alice", "far too long");
        let draft = ReviewDraftState::edit(MovieId::new("m1"), &review, 4);

        assert!(matches!(
            draft.submission(&alice),
            Err(ReviewDraftError::LengthExceeded { .. })
        ));
    }

    #[rstest]
    fn template_renders_movie_fields(movie: Movie, alice: User) {
        let rendered = render_review_template(
            "{{ user }} on {{ title }} ({{ rated }}, {{ movie_id }})",
            &movie,
            Some(&alice),
        )
        .expect("template should render");

        assert_eq!(rendered, "alice on Heat (R, m1)");
    }

    #[rstest]
    fn template_reports_invalid_syntax(movie: Movie) {
        let result = render_review_template("{{ title", &movie, None);

        assert!(
            matches!(result, Err(ReviewTemplateError::InvalidSyntax { .. })),
            "expected invalid syntax error, got {result:?}"
        );
    }
}
