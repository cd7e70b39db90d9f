//! Rendering logic for the browse TUI application.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::{BrowseApp, ListFocus, ViewMode};
use crate::tui::components::{
    MovieDetailComponent, MovieDetailViewContext, MovieListViewContext,
};

impl BrowseApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "Marquee - Movies";
        let loading_indicator = if self.loading { " [Loading...]" } else { "" };
        format!("{title}{loading_indicator}\n")
    }

    /// Renders the two-row search bar: the form, then the applied search.
    pub(super) fn render_search_bar(&self) -> String {
        let title_marker = focus_marker(self.list_focus == ListFocus::TitleInput);
        let rating_marker = focus_marker(self.list_focus == ListFocus::RatingSelect);
        let cursor = if self.list_focus == ListFocus::TitleInput {
            "_"
        } else {
            ""
        };
        format!(
            "{title_marker}Title: [{}{cursor}]  {rating_marker}Rating: < {} >\nShowing: {}\n",
            self.search.title_input(),
            self.search.rating_input(),
            self.search.applied().label(),
        )
    }

    /// Renders the list view: header, search bar, movies, and status bar.
    pub(super) fn render_movie_list_view(&self) -> String {
        let ctx = MovieListViewContext {
            movies: &self.movies,
            cursor_position: self.cursor_position,
            scroll_offset: self.scroll_offset,
            visible_height: self.movie_list.visible_height(),
            max_width: usize::from(self.width),
            page: self.shown_page,
            entries_per_page: self.entries_per_page,
        };

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_search_bar());
        output.push_str(&self.movie_list.view(&ctx));
        output.push_str(&self.render_status_bar());
        output
    }

    /// Renders the detail view between the header and status bar.
    pub(super) fn render_movie_detail_view(&self) -> String {
        let ctx = MovieDetailViewContext {
            state: &self.detail,
            user: self.user.as_ref(),
            draft: self.review_draft.as_ref(),
            max_width: usize::from(self.width),
            max_height: self.calculate_detail_height(),
        };

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&MovieDetailComponent::view(&ctx));
        output.push_str(&self.render_status_bar());
        output
    }

    /// Renders the status bar with help hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Error: {error}\n");
        }

        if self.review_action_pending {
            return "Sending review...\n".to_owned();
        }

        if let Some(draft) = &self.review_draft {
            return format!(
                "Review draft: F1-F9:template  text:edit  Del:clear  Enter:save  Esc:cancel  ({} left)\n",
                draft.remaining_chars()
            );
        }

        let hints = match (self.view_mode, self.list_focus) {
            (ViewMode::MovieList, ListFocus::TitleInput) => "Type a title  Enter:search  Esc:cancel",
            (ViewMode::MovieList, ListFocus::RatingSelect) => {
                "Left/Right:choose rating  Enter:apply  Esc:cancel"
            }
            (ViewMode::MovieList, ListFocus::Results) => self.movie_list_status_hints(),
            (ViewMode::MovieDetail, _) => self.movie_detail_status_hints(),
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Movie list:
  j, Down    Move cursor down
  k, Up      Move cursor up
  PgDn       Page down
  PgUp       Page up
  Home, g    Go to first movie
  End, G     Go to last movie
  Enter      Open movie details
  n          Get next page of results

Search:
  /, s       Search by title
  f          Filter by rating
  Enter      Apply search
  Esc        Leave the search bar

Movie details:
  j, k       Select review
  a          Add review
  e          Edit your review
  d          Delete your review
  Esc, b     Return to movie list

Review draft:
  F1-F9      Insert template
  text keys  Edit review text
  Backspace  Delete one character
  Delete     Clear the draft
  Enter      Save review
  Esc        Discard draft

Other:
  r          Reload current view
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";
        help_text.to_owned()
    }

    const fn movie_list_status_hints(&self) -> &'static str {
        if self.width <= 80 {
            "q:quit  ?:help  j/k:move  Enter:open  /:title  f:rating  n:next"
        } else {
            "j/k:move  Enter:open  /:search title  f:filter rating  n:next page  r:reload  ?:help  q:quit"
        }
    }

    const fn movie_detail_status_hints(&self) -> &'static str {
        if self.user.is_some() {
            "j/k:review  a:add  e:edit  d:delete  Esc:back  r:reload  ?:help  q:quit"
        } else {
            "j/k:review  Esc:back  r:reload  ?:help  q:quit"
        }
    }
}

const fn focus_marker(focused: bool) -> &'static str {
    if focused { "> " } else { "  " }
}
