//! Navigation handlers and cursor management.
//!
//! In the list view the cursor moves over the movies on the displayed page
//! and scrolling follows it. In the detail view the cursor selects a review.

use bubbletea_rs::Cmd;

use super::BrowseApp;
use crate::tui::messages::AppMsg;

impl BrowseApp {
    const fn move_cursor_up(&mut self, step: usize) {
        self.cursor_position = self.cursor_position.saturating_sub(step);
        self.adjust_scroll_to_cursor();
    }

    fn move_cursor_down(&mut self, step: usize) {
        let max_index = self.movies.len().saturating_sub(1);
        self.cursor_position = self.cursor_position.saturating_add(step).min(max_index);
        self.adjust_scroll_to_cursor();
    }

    /// Handles cursor up navigation.
    pub(super) const fn handle_cursor_up(&mut self) -> Option<Cmd> {
        self.move_cursor_up(1);
        None
    }

    /// Handles cursor down navigation.
    pub(super) fn handle_cursor_down(&mut self) -> Option<Cmd> {
        self.move_cursor_down(1);
        None
    }

    /// Handles page up navigation.
    pub(super) const fn handle_page_up(&mut self) -> Option<Cmd> {
        let page_size = self.movie_list.visible_height();
        self.move_cursor_up(page_size);
        None
    }

    /// Handles page down navigation.
    pub(super) fn handle_page_down(&mut self) -> Option<Cmd> {
        let page_size = self.movie_list.visible_height();
        self.move_cursor_down(page_size);
        None
    }

    /// Handles Home key navigation.
    pub(super) const fn handle_home(&mut self) -> Option<Cmd> {
        self.cursor_position = 0;
        self.scroll_offset = 0;
        None
    }

    /// Handles End key navigation.
    pub(super) fn handle_end(&mut self) -> Option<Cmd> {
        self.cursor_position = self.movies.len().saturating_sub(1);
        self.adjust_scroll_to_cursor();
        None
    }

    /// Moves the review cursor in the detail view.
    ///
    /// Paging keys jump to the first or last review.
    pub(super) fn handle_detail_navigation(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => self.detail.cursor_up(),
            AppMsg::CursorDown => self.detail.cursor_down(),
            AppMsg::PageUp | AppMsg::Home => {
                while self.detail.cursor() > 0 {
                    self.detail.cursor_up();
                }
            }
            AppMsg::PageDown | AppMsg::End => {
                let last = self.detail.reviews().len().saturating_sub(1);
                while self.detail.cursor() < last {
                    self.detail.cursor_down();
                }
            }
            _ => {}
        }
        None
    }
}
