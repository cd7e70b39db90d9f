//! reqwest client construction for the HTTP gateway.

use std::time::Duration;

use reqwest::Client;

use crate::api::error::ApiError;

/// Builds the shared HTTP client with the configured request timeout.
///
/// # Errors
///
/// Returns [`ApiError::Configuration`] when reqwest cannot initialise its
/// TLS backend or connection pool.
pub(super) fn build_http_client(timeout: Duration) -> Result<Client, ApiError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("marquee/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|error| ApiError::Configuration {
            message: format!("failed to configure HTTP client: {error}"),
        })
}
