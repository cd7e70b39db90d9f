//! Data models representing movies, reviews, and listing pages.
//!
//! This module contains domain models for data returned by the movie API.
//! Types prefixed with `Api` are internal deserialisation targets that convert
//! into public domain types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod payloads;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use payloads::{NewReview, ReviewDeletion, ReviewSubmission, ReviewUpdate};

/// Suffix appended to poster URLs for list thumbnails.
const THUMBNAIL_SUFFIX: &str = "100px180";
/// Suffix appended to poster URLs in the detail view.
const DETAIL_POSTER_SUFFIX: &str = "150px250";
/// Display format for review dates, e.g. `05 March 2021`.
const REVIEW_DATE_FORMAT: &str = "%d %B %Y";

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a server-assigned identifier.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the identifier value.
            #[must_use]
            pub const fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Server-assigned movie identifier.
    MovieId
);
string_id!(
    /// Server-assigned review identifier.
    ReviewId
);
string_id!(
    /// Identifier of the user who owns a review.
    UserId
);

/// The signed-in user, resolved outside this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// User identifier matched against `Review::user_id`.
    pub id: UserId,
    /// Display name attached to new reviews.
    pub name: String,
}

impl User {
    /// Creates a user from an identifier and display name.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(id),
            name: name.into(),
        }
    }
}

/// Movie as shown in listing pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieSummary {
    /// Movie identifier.
    pub id: MovieId,
    /// Movie title.
    pub title: String,
    /// Rating label (for example `PG-13`).
    pub rated: Option<String>,
    /// Poster image URL without size suffix.
    pub poster: Option<String>,
    /// Plot summary.
    pub plot: Option<String>,
}

impl MovieSummary {
    /// Returns the poster URL sized for list thumbnails.
    #[must_use]
    pub fn poster_thumbnail(&self) -> Option<String> {
        sized_poster(self.poster.as_deref(), THUMBNAIL_SUFFIX)
    }
}

/// Movie with its embedded reviews, as returned by the detail endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Movie {
    /// Movie identifier.
    pub id: MovieId,
    /// Movie title.
    pub title: String,
    /// Rating label.
    pub rated: Option<String>,
    /// Poster image URL without size suffix.
    pub poster: Option<String>,
    /// Plot summary.
    pub plot: Option<String>,
    /// Reviews in server-returned order.
    pub reviews: Vec<Review>,
}

impl Movie {
    /// Returns the poster URL sized for the detail view.
    #[must_use]
    pub fn poster_detail(&self) -> Option<String> {
        sized_poster(self.poster.as_deref(), DETAIL_POSTER_SUFFIX)
    }
}

/// A user-authored review of a movie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Review {
    /// Review identifier.
    pub id: ReviewId,
    /// Display name of the author.
    pub author: String,
    /// Identifier of the authoring user.
    pub user_id: UserId,
    /// Time the review was written, if the server sent a parseable date.
    pub date: Option<DateTime<Utc>>,
    /// Review text.
    pub body: String,
}

impl Review {
    /// Returns true when `user` authored this review.
    #[must_use]
    pub fn is_owned_by(&self, user: &User) -> bool {
        self.user_id == user.id
    }

    /// Formats the review date for display, e.g. `05 March 2021`.
    #[must_use]
    pub fn formatted_date(&self) -> String {
        self.date.map_or_else(
            || "unknown date".to_owned(),
            |date| date.format(REVIEW_DATE_FORMAT).to_string(),
        )
    }
}

/// One page of listing results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoviePage {
    /// Movies on this page.
    pub movies: Vec<MovieSummary>,
    /// Zero-based page number echoed by the server.
    pub page: u32,
    /// Server-controlled page size.
    pub entries_per_page: u32,
}

fn sized_poster(poster: Option<&str>, suffix: &str) -> Option<String> {
    poster
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(|url| format!("{}/{suffix}", url.trim_end_matches('/')))
}

fn parse_review_date(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|value| DateTime::parse_from_rfc3339(value).ok())
        .map(|date| date.with_timezone(&Utc))
}

/// API response type for listing and search pages.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiMoviePage {
    #[serde(default)]
    pub(crate) movies: Vec<ApiMovieSummary>,
    #[serde(default)]
    pub(crate) page: u32,
    #[serde(default)]
    pub(crate) entries_per_page: u32,
}

/// API response type for a movie inside a listing page.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiMovieSummary {
    #[serde(rename = "_id")]
    pub(crate) id: MovieId,
    #[serde(default)]
    pub(crate) title: String,
    pub(crate) rated: Option<String>,
    pub(crate) poster: Option<String>,
    pub(crate) plot: Option<String>,
}

/// API response type for the movie detail endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiMovie {
    #[serde(rename = "_id")]
    pub(crate) id: MovieId,
    #[serde(default)]
    pub(crate) title: String,
    pub(crate) rated: Option<String>,
    pub(crate) poster: Option<String>,
    pub(crate) plot: Option<String>,
    pub(crate) reviews: Option<Vec<ApiReview>>,
}

/// API response type for an embedded review.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiReview {
    #[serde(rename = "_id")]
    pub(crate) id: ReviewId,
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) user_id: UserId,
    pub(crate) date: Option<String>,
    #[serde(default)]
    pub(crate) review: String,
}

impl From<ApiMoviePage> for MoviePage {
    fn from(value: ApiMoviePage) -> Self {
        Self {
            movies: value.movies.into_iter().map(MovieSummary::from).collect(),
            page: value.page,
            entries_per_page: value.entries_per_page,
        }
    }
}

impl From<ApiMovieSummary> for MovieSummary {
    fn from(value: ApiMovieSummary) -> Self {
        Self {
            id: value.id,
            title: value.title,
            rated: value.rated,
            poster: value.poster,
            plot: value.plot,
        }
    }
}

impl From<ApiMovie> for Movie {
    fn from(value: ApiMovie) -> Self {
        Self {
            id: value.id,
            title: value.title,
            rated: value.rated,
            poster: value.poster,
            plot: value.plot,
            reviews: value
                .reviews
                .unwrap_or_default()
                .into_iter()
                .map(Review::from)
                .collect(),
        }
    }
}

impl From<ApiReview> for Review {
    fn from(value: ApiReview) -> Self {
        Self {
            date: parse_review_date(value.date.as_deref()),
            id: value.id,
            author: value.name,
            user_id: value.user_id,
            body: value.review,
        }
    }
}
