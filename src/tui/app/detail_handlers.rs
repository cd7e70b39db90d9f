//! Detail view handlers: opening a movie, leaving it, and deleting reviews.
//!
//! Delete is only offered for the signed-in user's own reviews. A successful
//! delete removes exactly the deleted review from the displayed movie
//! without re-fetching it.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::{BrowseApp, CATALOGUE_MISSING, ListFocus, ViewMode};
use crate::api::{ApiError, MovieId, ReviewDeletion, ReviewId};
use crate::tui::messages::AppMsg;

impl BrowseApp {
    /// Dispatches detail view messages to their handlers.
    pub(super) fn handle_detail_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::OpenSelectedMovie => self.open_selected_movie(),
            AppMsg::CloseDetail => {
                self.close_detail();
                None
            }
            AppMsg::DeleteSelectedReview => self.delete_selected_review(),
            AppMsg::ReviewDeleted {
                movie_id,
                review_id,
                index,
            } => {
                self.apply_review_deleted(movie_id, review_id, *index);
                None
            }
            AppMsg::ReviewActionFailed(error) => {
                self.apply_review_action_failed(error);
                None
            }
            _ => {
                // Unreachable: caller filters to detail messages.
                None
            }
        }
    }

    /// Switches to the detail view and fetches the selected movie.
    fn open_selected_movie(&mut self) -> Option<Cmd> {
        let movie_id = self.selected_movie()?.id.clone();
        let tag = self.detail.begin_load(movie_id.clone());
        self.view_mode = ViewMode::MovieDetail;
        self.list_focus = ListFocus::Results;
        self.error = None;
        self.spawn_movie_request(movie_id, tag)
    }

    /// Returns to the list; an in-flight movie load becomes stale.
    fn close_detail(&mut self) {
        self.detail.clear();
        self.review_draft = None;
        self.view_mode = ViewMode::MovieList;
        self.loading = false;
        self.error = None;
    }

    /// Sends a delete for the review under the cursor when the signed-in
    /// user owns it. Anything else is ignored.
    fn delete_selected_review(&mut self) -> Option<Cmd> {
        let index = self.detail.cursor();
        if !self.detail.can_modify(self.user.as_ref(), index) {
            return None;
        }
        let user = self.user.as_ref()?;
        let review = self.detail.selected_review()?;
        let movie_id = self.detail.movie_id()?.clone();
        let deletion = ReviewDeletion {
            review_id: review.id.clone(),
            user_id: user.id.clone(),
        };

        let Some(catalogue) = self.catalogue.clone() else {
            self.error = Some(CATALOGUE_MISSING.to_owned());
            return None;
        };
        self.error = None;
        self.review_action_pending = true;

        Some(Box::pin(async move {
            let msg = match catalogue.delete_review(&deletion).await {
                Ok(()) => AppMsg::ReviewDeleted {
                    movie_id,
                    review_id: deletion.review_id,
                    index,
                },
                Err(error) => AppMsg::ReviewActionFailed(error),
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        }))
    }

    /// Removes the deleted review from the displayed movie.
    ///
    /// The review is matched at its original index first and by id if the
    /// list has shifted since the delete was sent.
    fn apply_review_deleted(&mut self, movie_id: &MovieId, review_id: &ReviewId, index: usize) {
        self.review_action_pending = false;
        if self.detail.movie_id() != Some(movie_id) {
            return;
        }
        let at_index = self
            .detail
            .reviews()
            .get(index)
            .is_some_and(|review| &review.id == review_id);
        let position = if at_index {
            Some(index)
        } else {
            self.detail.position_of(review_id)
        };
        if let Some(found) = position {
            self.detail.remove_review_at(found);
        }
        self.error = None;
    }

    fn apply_review_action_failed(&mut self, error: &ApiError) {
        self.review_action_pending = false;
        self.loading = false;
        self.error = Some(error.to_string());
    }
}

#[cfg(test)]
#[path = "detail_handlers_tests.rs"]
mod tests;
