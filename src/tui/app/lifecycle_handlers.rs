//! Lifecycle and window handlers for the browse TUI.
//!
//! This module handles startup initialisation, terminal resize events, and
//! high-level lifecycle messages such as quit and help toggling.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::BrowseApp;
use crate::tui::messages::AppMsg;

impl BrowseApp {
    /// Dispatches lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Initialized => self.handle_initialized(),
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => {
                // Unreachable: caller filters to lifecycle messages.
                None
            }
        }
    }

    /// Command that delivers `Initialized` once the program loop is running.
    pub(super) fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }

    /// Loads the rating labels and the first page together.
    ///
    /// Only the first `Initialized` does anything.
    fn handle_initialized(&mut self) -> Option<Cmd> {
        if self.has_initialized {
            return None;
        }

        self.has_initialized = true;
        self.startup_cmd()
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        self.set_visible_list_height();
        self.adjust_scroll_to_cursor();
        None
    }
}
