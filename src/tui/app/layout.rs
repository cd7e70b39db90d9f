//! Layout helpers for the browse TUI model.
//!
//! This module encapsulates list height calculations and scroll adjustments
//! based on terminal size and cursor movement.

use super::{BrowseApp, CHROME_HEIGHT, DETAIL_CHROME_HEIGHT, MIN_LIST_HEIGHT};
use crate::tui::components::FOOTER_HEIGHT;

impl BrowseApp {
    /// Updates the visible row count for the movie list and stores it in the
    /// component.
    pub(super) fn set_visible_list_height(&mut self) {
        let list_height = self.calculate_list_height();
        self.movie_list.set_visible_height(list_height);
    }

    /// Calculates the number of rows available for movie rows.
    ///
    /// The header, search bar, status bar, and page footer take fixed rows.
    pub(super) fn calculate_list_height(&self) -> usize {
        usize::from(self.height)
            .saturating_sub(CHROME_HEIGHT)
            .saturating_sub(FOOTER_HEIGHT)
            .max(MIN_LIST_HEIGHT)
    }

    /// Calculates the number of rows available to the detail body.
    pub(super) fn calculate_detail_height(&self) -> usize {
        usize::from(self.height).saturating_sub(DETAIL_CHROME_HEIGHT)
    }

    /// Adjusts scroll offset so the selected cursor remains visible.
    pub(super) const fn adjust_scroll_to_cursor(&mut self) {
        let cursor = self.cursor_position;
        let visible_height = self.movie_list.visible_height();

        // If nothing is visible, keep the scroll offset unchanged.
        if visible_height == 0 {
            return;
        }

        if cursor < self.scroll_offset {
            self.scroll_offset = cursor;
            return;
        }

        let viewport_end = self.scroll_offset.saturating_add(visible_height);
        if cursor >= viewport_end {
            self.scroll_offset = cursor.saturating_sub(visible_height.saturating_sub(1));
        }
    }
}
