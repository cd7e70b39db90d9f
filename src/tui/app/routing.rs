//! Message routing and dispatch logic.
//!
//! Messages are first checked against the active view and any open draft,
//! which may block them, and are then dispatched by category.

use bubbletea_rs::Cmd;

use super::{BrowseApp, ViewMode};
use crate::tui::messages::AppMsg;

/// Result of view mode-based routing.
enum ViewModeRouting {
    Handled(Option<Cmd>),
    Fallthrough,
}

impl BrowseApp {
    /// Checks if a message should be blocked while a review draft is open.
    ///
    /// Only draft editing, API results, and lifecycle messages get through,
    /// so the draft cannot lose its movie underneath it.
    const fn is_blocked_while_drafting(msg: &AppMsg) -> bool {
        msg.is_navigation()
            || msg.is_search()
            || matches!(
                msg,
                AppMsg::ReloadRequested
                    | AppMsg::OpenSelectedMovie
                    | AppMsg::CloseDetail
                    | AppMsg::DeleteSelectedReview
                    | AppMsg::StartReviewDraft
                    | AppMsg::EditSelectedReview
            )
    }

    /// Checks if a message would start, change, or resend a review action.
    ///
    /// These wait until the server has answered the pending save or delete.
    const fn is_blocked_while_review_pending(msg: &AppMsg) -> bool {
        matches!(
            msg,
            AppMsg::StartReviewDraft
                | AppMsg::EditSelectedReview
                | AppMsg::DeleteSelectedReview
                | AppMsg::DraftInsertTemplate { .. }
                | AppMsg::DraftInsertChar(_)
                | AppMsg::DraftBackspace
                | AppMsg::DraftClear
                | AppMsg::DraftSubmit
                | AppMsg::DraftCancel
        )
    }

    /// Checks if a message only makes sense in the detail view.
    const fn is_detail_action(msg: &AppMsg) -> bool {
        matches!(
            msg,
            AppMsg::CloseDetail
                | AppMsg::DeleteSelectedReview
                | AppMsg::StartReviewDraft
                | AppMsg::EditSelectedReview
        )
    }

    /// Routes messages based on the current view mode.
    fn route_by_view_mode(&self, msg: &AppMsg) -> ViewModeRouting {
        if self.review_draft.is_some() && Self::is_blocked_while_drafting(msg) {
            return ViewModeRouting::Handled(None);
        }
        if self.review_action_pending && Self::is_blocked_while_review_pending(msg) {
            return ViewModeRouting::Handled(None);
        }

        match self.view_mode {
            ViewMode::MovieDetail if msg.is_search() => ViewModeRouting::Handled(None),
            ViewMode::MovieDetail if matches!(msg, AppMsg::OpenSelectedMovie) => {
                ViewModeRouting::Handled(None)
            }
            ViewMode::MovieList if Self::is_detail_action(msg) => ViewModeRouting::Handled(None),
            _ => ViewModeRouting::Fallthrough,
        }
    }

    /// Dispatches messages based on their category.
    fn dispatch_by_message_category(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_search() {
            return self.handle_search_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        if msg.is_detail() {
            return self.handle_detail_msg(msg);
        }
        if msg.is_review_draft() {
            return self.handle_review_draft_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all
    /// application messages and returns any resulting commands. It first
    /// applies mode-based blocking, then dispatches by category.
    #[doc(hidden)]
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if let ViewModeRouting::Handled(result) = self.route_by_view_mode(msg) {
            return result;
        }
        self.dispatch_by_message_category(msg)
    }

    /// Dispatches navigation messages to the active view.
    fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if self.view_mode == ViewMode::MovieDetail {
            return self.handle_detail_navigation(msg);
        }
        match msg {
            AppMsg::CursorUp => self.handle_cursor_up(),
            AppMsg::CursorDown => self.handle_cursor_down(),
            AppMsg::PageUp => self.handle_page_up(),
            AppMsg::PageDown => self.handle_page_down(),
            AppMsg::Home => self.handle_home(),
            AppMsg::End => self.handle_end(),
            _ => {
                // Unreachable: caller filters to navigation messages.
                None
            }
        }
    }
}
