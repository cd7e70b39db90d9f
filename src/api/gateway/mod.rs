//! Gateways for talking to the movie-reviews API.
//!
//! This module provides trait-based gateways for the REST surface. The
//! traits allow mocking in tests while [`HttpMovieGateway`] performs real
//! HTTP requests with reqwest.

mod client;
mod error_mapping;
mod rest;

pub use rest::HttpMovieGateway;

use async_trait::async_trait;

use crate::api::error::ApiError;
use crate::api::models::{Movie, MovieId, MoviePage, NewReview, ReviewDeletion, ReviewUpdate};
use crate::api::query::MovieQuery;

/// Gateway for read-only movie operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieGateway: Send + Sync {
    /// Fetch one page of movies, optionally filtered by a field.
    async fn list_movies(&self, query: &MovieQuery) -> Result<MoviePage, ApiError>;

    /// Fetch a single movie with its embedded reviews.
    async fn movie(&self, id: &MovieId) -> Result<Movie, ApiError>;

    /// Fetch the rating labels known to the server.
    async fn ratings(&self) -> Result<Vec<String>, ApiError>;
}

/// Gateway for review mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewGateway: Send + Sync {
    /// Post a new review.
    async fn create_review(&self, review: &NewReview) -> Result<(), ApiError>;

    /// Replace the text of an existing review.
    async fn update_review(&self, update: &ReviewUpdate) -> Result<(), ApiError>;

    /// Delete a review owned by the requesting user.
    async fn delete_review(&self, deletion: &ReviewDeletion) -> Result<(), ApiError>;
}
