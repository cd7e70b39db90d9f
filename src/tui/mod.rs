//! Terminal User Interface for browsing movies and their reviews.
//!
//! This module provides an interactive TUI for paging through the movie
//! collection, searching by title or rating, reading a movie's reviews, and
//! managing the signed-in user's own reviews, using the bubbletea-rs
//! framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::BrowseApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Search, detail, and review draft state
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Startup Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, startup values live in module-level storage. Call
//! [`set_browse_context`] before starting the program, and
//! `BrowseApp::init()` will pick up the API client and signed-in user.
//! [`set_review_draft_config`] and [`set_initial_terminal_size`] work the
//! same way.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

mod review_draft_config;
mod storage;

pub use app::BrowseApp;
pub use review_draft_config::{ReviewDraftConfig, set_review_draft_config};
pub(crate) use review_draft_config::get_review_draft_config;
pub use storage::{BrowseContext, set_browse_context, set_initial_terminal_size};
pub(crate) use storage::{get_browse_context, get_initial_terminal_size};
