//! Shared test utilities.

pub mod browser;
pub mod movie_api;
pub mod runtime;
