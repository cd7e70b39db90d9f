//! Validated API base URL and endpoint construction.

use url::Url;

use super::error::ApiError;
use super::models::MovieId;
use super::query::MovieQuery;

/// Address used when no API URL is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

const API_PREFIX: [&str; 3] = ["api", "v1", "movies"];

/// Base URL of the movie-reviews API.
///
/// Every endpoint lives under `<base>/api/v1/movies`. The base may carry a
/// path prefix of its own (for example a reverse-proxy mount point); endpoint
/// segments are appended after it.
///
/// # Example
///
/// ```
/// use marquee::api::ApiBaseUrl;
///
/// let base = ApiBaseUrl::parse("http://localhost:3000").expect("valid URL");
/// assert_eq!(
///     base.ratings_endpoint().expect("endpoint").as_str(),
///     "http://localhost:3000/api/v1/movies/ratings"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBaseUrl(Url);

impl ApiBaseUrl {
    /// Parses and validates an API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] when the input does not parse, uses a
    /// scheme other than `http`/`https`, or has no host.
    pub fn parse(input: &str) -> Result<Self, ApiError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ApiError::InvalidUrl("URL must not be empty".to_owned()));
        }

        let parsed =
            Url::parse(trimmed).map_err(|error| ApiError::InvalidUrl(error.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(format!(
                "unsupported scheme '{}', expected http or https",
                parsed.scheme()
            )));
        }

        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(ApiError::InvalidUrl("URL must include a host".to_owned()));
        }

        Ok(Self(parsed))
    }

    /// Borrow the base URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the listing/search endpoint with query parameters applied.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if the base URL cannot carry a path.
    pub fn movies_endpoint(&self, query: &MovieQuery) -> Result<Url, ApiError> {
        let mut url = self.endpoint(&[])?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.query_pairs() {
                pairs.append_pair(key, &value);
            }
        }
        Ok(url)
    }

    /// Returns the endpoint for a single movie, `/api/v1/movies/id/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if the base URL cannot carry a path.
    pub fn movie_endpoint(&self, id: &MovieId) -> Result<Url, ApiError> {
        self.endpoint(&["id", id.as_str()])
    }

    /// Returns the review mutation endpoint, `/api/v1/movies/review`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if the base URL cannot carry a path.
    pub fn review_endpoint(&self) -> Result<Url, ApiError> {
        self.endpoint(&["review"])
    }

    /// Returns the rating labels endpoint, `/api/v1/movies/ratings`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if the base URL cannot carry a path.
    pub fn ratings_endpoint(&self) -> Result<Url, ApiError> {
        self.endpoint(&["ratings"])
    }

    fn endpoint(&self, extra: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.0.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl("base URL cannot carry a path".to_owned()))?
            .pop_if_empty()
            .extend(API_PREFIX)
            .extend(extra);
        Ok(url)
    }
}
