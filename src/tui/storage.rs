//! Startup context storage for the browse TUI.
//!
//! This module owns the global `OnceLock` values used during TUI
//! bootstrapping and provides the setter/getter functions consumed by CLI
//! wiring and `BrowseApp::init()`.

use std::sync::OnceLock;

use crossterm::terminal;

use crate::api::{MovieCatalogue, User};

/// Global storage for the API catalogue and signed-in user.
///
/// This is set before the TUI program starts and read by `BrowseApp::init()`.
static BROWSE_CONTEXT: OnceLock<BrowseContext> = OnceLock::new();

/// Global storage for initial terminal dimensions.
///
/// This is set before the TUI program starts so the first frame uses the
/// actual terminal size.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Everything the browser needs to talk to the API.
#[derive(Debug, Clone)]
pub struct BrowseContext {
    /// Catalogue used for every request.
    pub catalogue: MovieCatalogue,
    /// Signed-in user; `None` browses anonymously.
    pub user: Option<User>,
}

/// Sets the API context for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. Without
/// it, every fetch reports that the API client is not configured.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_browse_context(context: BrowseContext) -> bool {
    BROWSE_CONTEXT.set(context).is_ok()
}

/// Sets the initial terminal dimensions for the TUI application.
///
/// # Returns
///
/// `true` if the dimensions were set, `false` if they were already set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Gets a clone of the browse context, if configured.
pub(crate) fn get_browse_context() -> Option<BrowseContext> {
    BROWSE_CONTEXT.get().cloned()
}

/// Gets the initial terminal dimensions from storage.
///
/// Falls back to the live terminal size, then to 80x24.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .or_else(|| {
            terminal::size()
                .ok()
                .filter(|(width, height)| *width > 0 && *height > 0)
        })
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}
