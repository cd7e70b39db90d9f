//! Search form and pagination handlers.
//!
//! Typing and moving the rating selector only edit the form. Committing a
//! search or asking for the next page issues exactly one list request.

use bubbletea_rs::Cmd;

use super::{BrowseApp, ListFocus};
use crate::tui::messages::AppMsg;

impl BrowseApp {
    /// Dispatches search and pagination messages to their handlers.
    pub(super) fn handle_search_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::FocusTitleSearch => {
                self.list_focus = ListFocus::TitleInput;
                None
            }
            AppMsg::TitleInputChar(character) => {
                self.search.push_title_char(*character);
                None
            }
            AppMsg::TitleInputBackspace => {
                self.search.pop_title_char();
                None
            }
            AppMsg::CommitTitleSearch => self.handle_commit_title_search(),
            AppMsg::FocusRatingSelect => {
                self.list_focus = ListFocus::RatingSelect;
                None
            }
            AppMsg::RatingSelectNext => {
                self.search.select_next_rating();
                None
            }
            AppMsg::RatingSelectPrevious => {
                self.search.select_previous_rating();
                None
            }
            AppMsg::CommitRatingSearch => self.handle_commit_rating_search(),
            AppMsg::CancelInput => {
                self.list_focus = ListFocus::Results;
                None
            }
            AppMsg::NextPage => self.handle_next_page(),
            _ => {
                // Unreachable: caller filters to search messages.
                None
            }
        }
    }

    fn handle_commit_title_search(&mut self) -> Option<Cmd> {
        self.list_focus = ListFocus::Results;
        let request = self.search.commit_title_search();
        self.spawn_list_request(request)
    }

    fn handle_commit_rating_search(&mut self) -> Option<Cmd> {
        self.list_focus = ListFocus::Results;
        let request = self.search.commit_rating_search();
        self.spawn_list_request(request)
    }

    /// Requests the following page; an empty page has no successor.
    fn handle_next_page(&mut self) -> Option<Cmd> {
        if self.movies.is_empty() {
            return None;
        }
        let request = self.search.next_page();
        self.spawn_list_request(request)
    }
}
