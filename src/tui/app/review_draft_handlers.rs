//! Review drafting handlers for the browse TUI.
//!
//! This module implements keyboard-driven template insertion and inline
//! review editing while enforcing the configured length limit, then sends
//! the finished draft as a create or an update.

use std::any::Any;
use std::convert::Infallible;

use bubbletea_rs::Cmd;
use chrono::Utc;

use super::{BrowseApp, CATALOGUE_MISSING};
use crate::api::{Review, ReviewId, ReviewSubmission};
use crate::tui::messages::AppMsg;
use crate::tui::state::{ReviewDraftState, ReviewTemplateError, render_review_template};

/// Status message when a draft key arrives with no draft open.
const NO_ACTIVE_DRAFT: &str = "No active review draft. Press 'a' to start one.";

impl BrowseApp {
    /// Handles review-drafting messages.
    pub(super) fn handle_review_draft_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::StartReviewDraft => {
                self.start_review_draft();
                None
            }
            AppMsg::EditSelectedReview => {
                self.edit_selected_review();
                None
            }
            AppMsg::DraftInsertTemplate { template_index } => {
                self.insert_review_template(*template_index);
                None
            }
            AppMsg::DraftInsertChar(character) => {
                self.with_active_draft(|draft| draft.push_char(*character));
                None
            }
            AppMsg::DraftBackspace => {
                self.with_active_draft(|draft| {
                    draft.backspace();
                    Ok::<(), Infallible>(())
                });
                None
            }
            AppMsg::DraftClear => {
                self.with_active_draft(|draft| {
                    draft.clear();
                    Ok::<(), Infallible>(())
                });
                None
            }
            AppMsg::DraftSubmit => self.submit_review_draft(),
            AppMsg::DraftCancel => {
                self.review_draft = None;
                self.error = None;
                None
            }
            AppMsg::ReviewSaved(submission) => self.apply_review_saved(submission),
            _ => None,
        }
    }

    /// Opens an empty draft when the signed-in user may add a review.
    fn start_review_draft(&mut self) {
        if !self.detail.can_add(self.user.as_ref()) {
            return;
        }
        let Some(movie_id) = self.detail.movie_id().cloned() else {
            return;
        };
        self.review_draft = Some(ReviewDraftState::create(
            movie_id,
            self.review_draft_config.max_length,
        ));
        self.error = None;
    }

    /// Opens a draft pre-filled with the selected review when the signed-in
    /// user owns it.
    fn edit_selected_review(&mut self) {
        if !self
            .detail
            .can_modify(self.user.as_ref(), self.detail.cursor())
        {
            return;
        }
        let (Some(movie_id), Some(review)) =
            (self.detail.movie_id().cloned(), self.detail.selected_review())
        else {
            return;
        };
        self.review_draft = Some(ReviewDraftState::edit(
            movie_id,
            review,
            self.review_draft_config.max_length,
        ));
        self.error = None;
    }

    fn insert_review_template(&mut self, template_index: usize) {
        if self.review_draft.is_none() {
            self.error = Some(NO_ACTIVE_DRAFT.to_owned());
            return;
        }

        let Some(template_source) = self.review_draft_config.templates.get(template_index) else {
            let available = self.review_draft_config.templates.len();
            self.error = Some(format!(
                "Review template {} is not configured (available templates: {available})",
                template_index.saturating_add(1),
            ));
            return;
        };

        let Some(movie) = self.detail.movie() else {
            self.error = Some(NO_ACTIVE_DRAFT.to_owned());
            return;
        };

        let rendered = match render_review_template(template_source, movie, self.user.as_ref()) {
            Ok(rendered) => rendered,
            Err(
                ReviewTemplateError::InvalidSyntax { message }
                | ReviewTemplateError::RenderFailed { message },
            ) => {
                self.error = Some(format!("Review template rendering failed: {message}"));
                return;
            }
        };

        self.with_active_draft(|draft| draft.append_text(rendered.as_str()));
    }

    /// Executes an edit on the open draft, reporting failures in the status
    /// bar.
    fn with_active_draft<E>(
        &mut self,
        operation: impl FnOnce(&mut ReviewDraftState) -> Result<(), E>,
    ) where
        E: std::fmt::Display,
    {
        let Some(draft) = self.review_draft.as_mut() else {
            self.error = Some(NO_ACTIVE_DRAFT.to_owned());
            return;
        };
        self.error = operation(draft).err().map(|error| error.to_string());
    }

    /// Validates the draft and sends it.
    ///
    /// The draft stays open until the server accepts it so a failed save
    /// loses nothing.
    fn submit_review_draft(&mut self) -> Option<Cmd> {
        let Some(draft) = self.review_draft.as_ref() else {
            self.error = Some(NO_ACTIVE_DRAFT.to_owned());
            return None;
        };
        let user = self.user.as_ref()?;
        let submission = match draft.submission(user) {
            Ok(submission) => submission,
            Err(error) => {
                self.error = Some(error.to_string());
                return None;
            }
        };

        let Some(catalogue) = self.catalogue.clone() else {
            self.error = Some(CATALOGUE_MISSING.to_owned());
            return None;
        };
        self.error = None;
        self.review_action_pending = true;

        Some(Box::pin(async move {
            let msg = match catalogue.submit_review(&submission).await {
                Ok(()) => AppMsg::ReviewSaved(submission),
                Err(error) => AppMsg::ReviewActionFailed(error),
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        }))
    }

    /// Closes the draft, shows the saved text immediately, and re-fetches
    /// the movie so server-assigned ids and dates replace the placeholder.
    fn apply_review_saved(&mut self, submission: &ReviewSubmission) -> Option<Cmd> {
        self.review_action_pending = false;
        self.review_draft = None;
        self.error = None;

        if self.detail.movie_id() != Some(submission.movie_id()) {
            return None;
        }
        if let Some(review) = self.provisional_review(submission) {
            self.detail.upsert_review(review);
        }

        let (movie_id, tag) = self.detail.begin_reload()?;
        self.spawn_movie_request(movie_id, tag)
    }

    fn provisional_review(&self, submission: &ReviewSubmission) -> Option<Review> {
        match submission {
            ReviewSubmission::Create(review) => Some(Review {
                id: ReviewId::default(),
                author: review.name.clone(),
                user_id: review.user_id.clone(),
                date: Some(Utc::now()),
                body: review.review.clone(),
            }),
            ReviewSubmission::Update(update) => {
                let position = self.detail.position_of(&update.review_id)?;
                let existing = self.detail.reviews().get(position)?;
                Some(Review {
                    body: update.review.clone(),
                    ..existing.clone()
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "review_draft_handlers_tests.rs"]
mod tests;
