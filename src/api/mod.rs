//! Access to the movie-reviews REST API.
//!
//! The layers build on each other: [`ApiBaseUrl`] turns configuration into
//! endpoints, the [`gateway`] traits describe the operations, and
//! [`MovieCatalogue`] adds logging and telemetry on top of them.

pub mod base_url;
pub mod catalogue;
pub mod error;
pub mod gateway;
pub mod models;
pub mod query;

pub use base_url::{ApiBaseUrl, DEFAULT_API_URL};
pub use catalogue::MovieCatalogue;
pub use error::ApiError;
pub use gateway::{HttpMovieGateway, MovieGateway, ReviewGateway};
pub use models::{
    Movie, MovieId, MoviePage, MovieSummary, NewReview, Review, ReviewDeletion, ReviewId,
    ReviewSubmission, ReviewUpdate, User, UserId,
};
pub use query::{MovieQuery, SearchField};
