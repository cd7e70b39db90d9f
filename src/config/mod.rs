//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.marquee.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `MARQUEE_API_URL`, `MARQUEE_USER_ID`, or
//!    legacy `VITE_API_BASE_URL`
//! 4. **Command-line arguments** – `--api-url`/`-a`, `--title`/`-s`, ...
//!
//! # Configuration File
//!
//! ```toml
//! api_url = "http://localhost:3000"
//! user_id = "u-123"
//! user_name = "Alice"
//! review_max_length = 1000
//! review_templates = ["{{ title }} is worth watching."]
//! log_file = "marquee.log"
//! ```

use std::env;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::api::{ApiBaseUrl, ApiError, DEFAULT_API_URL, MovieId, MovieQuery, SearchField, User};

/// Environment variable consulted when no API URL is configured.
pub const LEGACY_API_URL_ENV: &str = "VITE_API_BASE_URL";

/// Default HTTP timeout applied to every API request.
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

/// Default maximum length of a review draft, in characters.
pub const DEFAULT_REVIEW_MAX_LENGTH: usize = 1000;

/// Returns the review templates offered when none are configured.
#[must_use]
pub fn default_review_templates() -> Vec<String> {
    vec![
        "{{ title }} is well worth watching.".to_owned(),
        "Rated {{ rated }}, and it earns it.".to_owned(),
        "Not for me, but fans of {{ title }} may disagree.".to_owned(),
    ]
}

/// Operation mode determined by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive terminal browser.
    BrowseTui,
    /// Print a single movie with its reviews.
    MovieDetail,
    /// Print the rating labels known to the server.
    RatingList,
    /// Print one page of movies, optionally filtered.
    MovieListing,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `MARQUEE_API_URL`, `VITE_API_BASE_URL`, or `--api-url`: API base URL
/// - `MARQUEE_USER_ID` / `MARQUEE_USER_NAME`: acting user
/// - `MARQUEE_TITLE` / `MARQUEE_RATED`: listing filters
///
/// # Example
///
/// ```no_run
/// use marquee::MarqueeConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = MarqueeConfig::load().expect("failed to load configuration");
/// let base_url = config.resolve_api_url().expect("API URL should be valid");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "MARQUEE",
    discovery(
        dotfile_name = ".marquee.toml",
        config_file_name = "marquee.toml",
        app_name = "marquee"
    )
)]
pub struct MarqueeConfig {
    /// Base URL of the movie-reviews API.
    ///
    /// Can be provided via:
    /// - CLI: `--api-url <URL>` or `-a <URL>`
    /// - Environment: `MARQUEE_API_URL` or `VITE_API_BASE_URL` (legacy)
    /// - Config file: `api_url = "..."`
    #[ortho_config(cli_short = 'a')]
    pub api_url: Option<String>,

    /// Identifier of the acting user. Review actions need both id and name.
    #[ortho_config()]
    pub user_id: Option<String>,

    /// Display name of the acting user.
    #[ortho_config()]
    pub user_name: Option<String>,

    /// Title search for the one-shot listing.
    ///
    /// Can be provided via:
    /// - CLI: `--title <TEXT>` or `-s <TEXT>`
    /// - Environment: `MARQUEE_TITLE`
    #[ortho_config(cli_short = 's')]
    pub title: Option<String>,

    /// Rating filter for the one-shot listing (e.g. `PG-13`).
    #[ortho_config(cli_short = 'r')]
    pub rated: Option<String>,

    /// HTTP request timeout in seconds. Defaults to 10.
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// Zero-based page for the one-shot listing.
    #[ortho_config(cli_short = 'p')]
    pub page: u32,

    /// Movie to print with its reviews.
    ///
    /// Can be provided via:
    /// - CLI: `--movie-id <ID>` or `-m <ID>`
    /// - Environment: `MARQUEE_MOVIE_ID`
    #[ortho_config(cli_short = 'm')]
    pub movie_id: Option<String>,

    /// Prints the rating labels and exits.
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment, so this is CLI or file only.
    #[ortho_config()]
    pub ratings: bool,

    /// Launches the interactive terminal browser.
    ///
    /// Can be provided via:
    /// - CLI: `--tui` / `-T`
    /// - Config file: `tui = true`
    #[ortho_config(cli_short = 'T')]
    pub tui: bool,

    /// Maximum review draft length in characters. Defaults to 1000.
    #[ortho_config()]
    pub review_max_length: usize,

    /// MiniJinja review templates mapped to keys `F1`-`F9` in the draft view.
    ///
    /// Available variables: `title`, `rated`, `user`, `movie_id`.
    #[ortho_config()]
    pub review_templates: Vec<String>,

    /// File that receives log output. TUI mode logs nowhere without it.
    #[ortho_config()]
    pub log_file: Option<String>,

    /// `tracing` filter directive, e.g. `marquee=debug`.
    #[ortho_config()]
    pub log_filter: Option<String>,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            user_id: None,
            user_name: None,
            title: None,
            rated: None,
            page: 0,
            movie_id: None,
            ratings: false,
            tui: false,
            review_max_length: DEFAULT_REVIEW_MAX_LENGTH,
            review_templates: default_review_templates(),
            log_file: None,
            log_filter: None,
        }
    }
}

impl MarqueeConfig {
    /// Resolves the API base URL.
    ///
    /// Falls back to the legacy `VITE_API_BASE_URL` environment variable and
    /// then to `http://localhost:3000`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] when the resolved value is not an
    /// http(s) URL.
    pub fn resolve_api_url(&self) -> Result<ApiBaseUrl, ApiError> {
        let raw = self
            .api_url
            .clone()
            .or_else(|| env::var(LEGACY_API_URL_ENV).ok())
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        ApiBaseUrl::parse(&raw)
    }

    /// Returns the acting user when both id and name are configured.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        let id = self
            .user_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())?;
        let name = self
            .user_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())?;
        Some(User::new(id, name))
    }

    /// Builds the one-shot listing query.
    ///
    /// A title search wins over a rating filter, mirroring the browser where
    /// only one filter is ever applied.
    #[must_use]
    pub fn listing_query(&self) -> MovieQuery {
        match (&self.title, &self.rated) {
            (Some(title), _) => MovieQuery::by_field(SearchField::Title, title.clone(), self.page),
            (None, Some(rated)) => MovieQuery::by_field(SearchField::Rated, rated.clone(), self.page),
            (None, None) => MovieQuery::all(self.page),
        }
    }

    /// Returns the configured request timeout, at least one second.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        let seconds = if self.request_timeout_seconds == 0 {
            1
        } else {
            self.request_timeout_seconds
        };
        Duration::from_secs(seconds)
    }

    /// Returns the movie id for detail mode.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when no movie id is configured.
    pub fn require_movie_id(&self) -> Result<MovieId, ApiError> {
        self.movie_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(MovieId::new)
            .ok_or_else(|| ApiError::Configuration {
                message: "movie id is required (use --movie-id or -m)".to_owned(),
            })
    }

    /// Determines the operation mode based on provided configuration.
    ///
    /// Returns `BrowseTui` when TUI mode is enabled, `MovieDetail` when a
    /// movie id is given, `RatingList` when ratings are requested, or
    /// `MovieListing` otherwise.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.tui {
            OperationMode::BrowseTui
        } else if self.movie_id.is_some() {
            OperationMode::MovieDetail
        } else if self.ratings {
            OperationMode::RatingList
        } else {
            OperationMode::MovieListing
        }
    }
}

#[cfg(test)]
mod tests;
