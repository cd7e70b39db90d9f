//! Request bodies for review mutations.

use serde::Serialize;

use super::{MovieId, ReviewId, User, UserId};

/// Body of `POST /api/v1/movies/review`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewReview {
    /// Movie the review belongs to.
    pub movie_id: MovieId,
    /// Review text.
    pub review: String,
    /// Authoring user.
    pub user_id: UserId,
    /// Display name of the author.
    pub name: String,
}

impl NewReview {
    /// Builds a creation payload for `user`.
    #[must_use]
    pub fn new(movie_id: MovieId, review: impl Into<String>, user: &User) -> Self {
        Self {
            movie_id,
            review: review.into(),
            user_id: user.id.clone(),
            name: user.name.clone(),
        }
    }
}

/// Body of `PUT /api/v1/movies/review`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewUpdate {
    /// Review being replaced.
    pub review_id: ReviewId,
    /// Movie the review belongs to.
    pub movie_id: MovieId,
    /// Replacement review text.
    pub review: String,
    /// Authoring user; the server rejects updates from anyone else.
    pub user_id: UserId,
    /// Display name of the author.
    pub name: String,
}

impl ReviewUpdate {
    /// Builds an update payload for `user`.
    #[must_use]
    pub fn new(
        review_id: ReviewId,
        movie_id: MovieId,
        review: impl Into<String>,
        user: &User,
    ) -> Self {
        Self {
            review_id,
            movie_id,
            review: review.into(),
            user_id: user.id.clone(),
            name: user.name.clone(),
        }
    }
}

/// Body of `DELETE /api/v1/movies/review`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewDeletion {
    /// Review to delete.
    pub review_id: ReviewId,
    /// Requesting user; must own the review.
    pub user_id: UserId,
}

/// A validated create or update request produced by a review draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewSubmission {
    /// Post a new review.
    Create(NewReview),
    /// Replace an existing review.
    Update(ReviewUpdate),
}

impl ReviewSubmission {
    /// Returns the movie the submission targets.
    #[must_use]
    pub const fn movie_id(&self) -> &MovieId {
        match self {
            Self::Create(review) => &review.movie_id,
            Self::Update(update) => &update.movie_id,
        }
    }

    /// Returns the submitted review text.
    #[must_use]
    pub const fn text(&self) -> &str {
        match self {
            Self::Create(review) => review.review.as_str(),
            Self::Update(update) => update.review.as_str(),
        }
    }
}
