//! Input handling for the TUI application.
//!
//! This module maps terminal key events to application messages. The same
//! key means different things depending on which view or input has focus,
//! so mapping always takes an [`InputContext`].

use bubbletea_rs::event::KeyMsg;
use crossterm::event::KeyCode;

use super::messages::AppMsg;

/// Which part of the interface receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing the movie list.
    MovieList,
    /// Typing into the title search box.
    TitleInput,
    /// Choosing a rating label.
    RatingSelect,
    /// Viewing a single movie and its reviews.
    MovieDetail,
    /// Editing a review draft.
    ReviewDraft,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message_with_context(key: &KeyMsg, context: InputContext) -> Option<AppMsg> {
    match context {
        InputContext::MovieList => map_movie_list_key(key.key),
        InputContext::TitleInput => map_title_input_key(key.key),
        InputContext::RatingSelect => map_rating_select_key(key.key),
        InputContext::MovieDetail => map_movie_detail_key(key.key),
        InputContext::ReviewDraft => map_review_draft_key(key.key),
    }
}

const fn map_movie_list_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Enter => Some(AppMsg::OpenSelectedMovie),
        KeyCode::Char('/' | 's') => Some(AppMsg::FocusTitleSearch),
        KeyCode::Char('f') => Some(AppMsg::FocusRatingSelect),
        KeyCode::Char('n') => Some(AppMsg::NextPage),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        other => map_shared_browse_key(other),
    }
}

const fn map_movie_detail_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(AppMsg::CloseDetail),
        KeyCode::Char('a') => Some(AppMsg::StartReviewDraft),
        KeyCode::Char('e') => Some(AppMsg::EditSelectedReview),
        KeyCode::Char('d') => Some(AppMsg::DeleteSelectedReview),
        other => map_shared_browse_key(other),
    }
}

/// Keys with the same meaning in the list and detail views.
const fn map_shared_browse_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Char('r') => Some(AppMsg::ReloadRequested),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

const fn map_title_input_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Enter => Some(AppMsg::CommitTitleSearch),
        KeyCode::Esc => Some(AppMsg::CancelInput),
        KeyCode::Backspace => Some(AppMsg::TitleInputBackspace),
        KeyCode::Char(character) => Some(AppMsg::TitleInputChar(character)),
        _ => None,
    }
}

const fn map_rating_select_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Enter => Some(AppMsg::CommitRatingSearch),
        KeyCode::Esc => Some(AppMsg::CancelInput),
        KeyCode::Right | KeyCode::Down | KeyCode::Char('j' | 'l') => {
            Some(AppMsg::RatingSelectNext)
        }
        KeyCode::Left | KeyCode::Up | KeyCode::Char('k' | 'h') => {
            Some(AppMsg::RatingSelectPrevious)
        }
        _ => None,
    }
}

fn map_review_draft_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Enter => Some(AppMsg::DraftSubmit),
        KeyCode::Esc => Some(AppMsg::DraftCancel),
        KeyCode::Backspace => Some(AppMsg::DraftBackspace),
        KeyCode::Delete => Some(AppMsg::DraftClear),
        KeyCode::F(slot @ 1..=9) => Some(AppMsg::DraftInsertTemplate {
            template_index: usize::from(slot.saturating_sub(1)),
        }),
        KeyCode::Char(character) => Some(AppMsg::DraftInsertChar(character)),
        _ => None,
    }
}
