//! Marquee library crate providing a terminal browser for movie reviews.
//!
//! The library wraps reqwest to talk to a movie-reviews REST API, tracks
//! search and pagination state for the list view, and renders a
//! bubbletea-rs interface for browsing movies and managing reviews.

pub mod api;
pub mod config;
pub mod telemetry;
pub mod tui;

pub use api::{
    ApiBaseUrl, ApiError, HttpMovieGateway, Movie, MovieCatalogue, MovieGateway, MovieId,
    MoviePage, MovieQuery, MovieSummary, Review, ReviewGateway, ReviewId, SearchField, User,
};
pub use config::{MarqueeConfig, OperationMode};
