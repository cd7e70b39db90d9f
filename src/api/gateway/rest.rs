//! reqwest-backed implementation of the movie and review gateways.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::client::build_http_client;
use super::error_mapping::{map_status_error, map_transport_error};
use super::{MovieGateway, ReviewGateway};
use crate::api::base_url::ApiBaseUrl;
use crate::api::error::ApiError;
use crate::api::models::{
    ApiMovie, ApiMoviePage, Movie, MovieId, MoviePage, NewReview, ReviewDeletion, ReviewUpdate,
};
use crate::api::query::MovieQuery;

/// Gateway that talks to the movie API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpMovieGateway {
    client: Client,
    base_url: ApiBaseUrl,
}

impl HttpMovieGateway {
    /// Creates a gateway rooted at `base_url` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when the HTTP client cannot be
    /// constructed.
    pub fn new(base_url: ApiBaseUrl, timeout: Duration) -> Result<Self, ApiError> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url,
        })
    }

    /// Returns the base URL requests are issued against.
    #[must_use]
    pub const fn base_url(&self) -> &ApiBaseUrl {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        url: Url,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;
        let body = read_success_body(operation, response).await?;

        serde_json::from_slice(&body).map_err(|error| ApiError::Decode {
            message: format!("{operation} returned an unexpected payload: {error}"),
        })
    }

    async fn send_json<B: Serialize + Sync>(
        &self,
        operation: &str,
        method: Method,
        payload: &B,
    ) -> Result<(), ApiError> {
        let url = self.base_url.review_endpoint()?;
        let response = self
            .client
            .request(method, url)
            .json(payload)
            .send()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;

        // Mutation responses carry only a status object.
        read_success_body(operation, response).await.map(drop)
    }
}

async fn read_success_body(operation: &str, response: Response) -> Result<Vec<u8>, ApiError> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|error| map_transport_error(operation, &error))?;

    if status.is_success() {
        return Ok(body.to_vec());
    }

    let text = String::from_utf8_lossy(&body);
    Err(map_status_error(operation, status, &text))
}

#[async_trait]
impl MovieGateway for HttpMovieGateway {
    async fn list_movies(&self, query: &MovieQuery) -> Result<MoviePage, ApiError> {
        let url = self.base_url.movies_endpoint(query)?;
        let page: ApiMoviePage = self.get_json("list movies", url).await?;
        Ok(page.into())
    }

    async fn movie(&self, id: &MovieId) -> Result<Movie, ApiError> {
        let url = self.base_url.movie_endpoint(id)?;
        let movie: ApiMovie = self.get_json("get movie", url).await?;
        Ok(movie.into())
    }

    async fn ratings(&self) -> Result<Vec<String>, ApiError> {
        let url = self.base_url.ratings_endpoint()?;
        self.get_json("list ratings", url).await
    }
}

#[async_trait]
impl ReviewGateway for HttpMovieGateway {
    async fn create_review(&self, review: &NewReview) -> Result<(), ApiError> {
        self.send_json("create review", Method::POST, review).await
    }

    async fn update_review(&self, update: &ReviewUpdate) -> Result<(), ApiError> {
        self.send_json("update review", Method::PUT, update).await
    }

    async fn delete_review(&self, deletion: &ReviewDeletion) -> Result<(), ApiError> {
        self.send_json("delete review", Method::DELETE, deletion).await
    }
}
