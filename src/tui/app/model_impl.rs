//! `Model` trait implementation for the browse TUI application.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `BrowseApp`, handling initialisation, update dispatch, and view rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::{BrowseApp, ListFocus, ViewMode};
use crate::tui::input::{InputContext, map_key_to_message_with_context};
use crate::tui::messages::AppMsg;

impl Model for BrowseApp {
    fn init() -> (Self, Option<Cmd>) {
        let model = match crate::tui::get_browse_context() {
            Some(context) => Self::new(Some(context.catalogue), context.user),
            None => Self::empty(),
        };

        // The first requests are issued when `AppMsg::Initialized` arrives.
        (model, Some(Self::immediate_init_cmd()))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let context = self.input_context();
            if let Some(mapped) = map_key_to_message_with_context(key_msg, context) {
                return self.handle_message(&mapped);
            }
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        let output = match self.view_mode {
            ViewMode::MovieList => self.render_movie_list_view(),
            ViewMode::MovieDetail => self.render_movie_detail_view(),
        };
        self.normalise_viewport(&output)
    }
}

impl BrowseApp {
    /// Returns the current input context for context-aware key mapping.
    pub(super) const fn input_context(&self) -> InputContext {
        if self.review_draft.is_some() {
            return InputContext::ReviewDraft;
        }
        match (self.view_mode, self.list_focus) {
            (ViewMode::MovieDetail, _) => InputContext::MovieDetail,
            (ViewMode::MovieList, ListFocus::Results) => InputContext::MovieList,
            (ViewMode::MovieList, ListFocus::TitleInput) => InputContext::TitleInput,
            (ViewMode::MovieList, ListFocus::RatingSelect) => InputContext::RatingSelect,
        }
    }

    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width to avoid
    /// autowrap and padded with spaces so shorter frames clear stale cells.
    fn normalise_viewport(&self, output: &str) -> String {
        let width = usize::from(self.width.max(1));
        let safe_width = width.saturating_sub(1).max(1);
        let height = usize::from(self.height.max(1));

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

fn pad_or_truncate_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible_width = 0_usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible_width.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    output.push_str(&" ".repeat(width.saturating_sub(visible_width)));
    output
}
