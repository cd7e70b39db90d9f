//! Observed access to the movie API.
//!
//! [`MovieCatalogue`] wraps the gateways so every call is timed, failures
//! are logged and recorded as telemetry, and errors are returned unchanged
//! to the caller. The TUI and CLI only ever talk to the API through it.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::api::base_url::ApiBaseUrl;
use crate::api::error::ApiError;
use crate::api::gateway::{HttpMovieGateway, MovieGateway, ReviewGateway};
use crate::api::models::{Movie, MovieId, MoviePage, ReviewDeletion, ReviewSubmission};
use crate::api::query::MovieQuery;
use crate::telemetry::{TelemetryEvent, TelemetrySink};

/// Facade over the movie and review gateways.
#[derive(Clone)]
pub struct MovieCatalogue {
    movies: Arc<dyn MovieGateway>,
    reviews: Arc<dyn ReviewGateway>,
    telemetry: Arc<dyn TelemetrySink>,
}

impl std::fmt::Debug for MovieCatalogue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovieCatalogue").finish_non_exhaustive()
    }
}

impl MovieCatalogue {
    /// Creates a catalogue from explicit gateway implementations.
    #[must_use]
    pub fn new(
        movies: Arc<dyn MovieGateway>,
        reviews: Arc<dyn ReviewGateway>,
        telemetry: Arc<dyn TelemetrySink>,
    ) -> Self {
        Self {
            movies,
            reviews,
            telemetry,
        }
    }

    /// Creates a catalogue backed by a single [`HttpMovieGateway`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when the HTTP client cannot be
    /// built.
    pub fn http(
        base_url: ApiBaseUrl,
        timeout: Duration,
        telemetry: Arc<dyn TelemetrySink>,
    ) -> Result<Self, ApiError> {
        let gateway = Arc::new(HttpMovieGateway::new(base_url, timeout)?);
        Ok(Self::new(
            Arc::clone(&gateway) as Arc<dyn MovieGateway>,
            gateway,
            telemetry,
        ))
    }

    /// Lists one page of movies.
    ///
    /// # Errors
    ///
    /// Propagates the gateway's [`ApiError`].
    pub async fn list_movies(&self, query: &MovieQuery) -> Result<MoviePage, ApiError> {
        self.observe("list movies", self.movies.list_movies(query)).await
    }

    /// Fetches a movie with its reviews.
    ///
    /// # Errors
    ///
    /// Propagates the gateway's [`ApiError`].
    pub async fn movie(&self, id: &MovieId) -> Result<Movie, ApiError> {
        self.observe("get movie", self.movies.movie(id)).await
    }

    /// Fetches the rating labels offered by the server.
    ///
    /// # Errors
    ///
    /// Propagates the gateway's [`ApiError`].
    pub async fn ratings(&self) -> Result<Vec<String>, ApiError> {
        self.observe("list ratings", self.movies.ratings()).await
    }

    /// Sends a drafted review as a create or an update.
    ///
    /// # Errors
    ///
    /// Propagates the gateway's [`ApiError`].
    pub async fn submit_review(&self, submission: &ReviewSubmission) -> Result<(), ApiError> {
        match submission {
            ReviewSubmission::Create(review) => {
                self.observe("create review", self.reviews.create_review(review))
                    .await?;
                tracing::info!(movie_id = %review.movie_id, "review created");
            }
            ReviewSubmission::Update(update) => {
                self.observe("update review", self.reviews.update_review(update))
                    .await?;
                tracing::info!(review_id = %update.review_id, "review updated");
            }
        }
        Ok(())
    }

    /// Deletes a review.
    ///
    /// # Errors
    ///
    /// Propagates the gateway's [`ApiError`].
    pub async fn delete_review(&self, deletion: &ReviewDeletion) -> Result<(), ApiError> {
        self.observe("delete review", self.reviews.delete_review(deletion)).await?;
        tracing::info!(review_id = %deletion.review_id, "review deleted");
        Ok(())
    }

    /// Records that a response was dropped because the view moved on.
    pub fn discard_stale(&self, operation: &str, request_generation: u64, current_generation: u64) {
        tracing::debug!(
            operation,
            request_generation,
            current_generation,
            "discarding stale response"
        );
        self.telemetry.record(TelemetryEvent::StaleResponseDiscarded {
            operation: operation.to_owned(),
            request_generation,
            current_generation,
        });
    }

    async fn observe<T, F>(&self, operation: &'static str, call: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let started = Instant::now();
        match call.await {
            Ok(value) => {
                let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
                self.telemetry.record(TelemetryEvent::RequestCompleted {
                    operation: operation.to_owned(),
                    latency_ms,
                });
                Ok(value)
            }
            Err(error) => {
                tracing::warn!(operation, error = %error, "movie API request failed");
                self.telemetry.record(TelemetryEvent::RequestFailed {
                    operation: operation.to_owned(),
                    error_kind: error.kind().to_owned(),
                    status: error.status().map(|code| code.as_u16()),
                    message: error.to_string(),
                });
                Err(error)
            }
        }
    }
}
