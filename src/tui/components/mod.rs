//! UI components for the movie browser TUI.
//!
//! Each component renders one view from a borrowed context; state lives in
//! the application model.

mod movie_detail;
mod movie_list;
mod text_wrap;

pub use movie_detail::{MovieDetailComponent, MovieDetailViewContext};
pub(crate) use movie_list::FOOTER_HEIGHT;
pub use movie_list::{MovieListComponent, MovieListViewContext};
pub use text_wrap::{truncate_to_width, wrap_text};
