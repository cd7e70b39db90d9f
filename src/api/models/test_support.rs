//! Test helpers for constructing movie and review fixtures.
//!
//! # Examples
//!
//! ```
//! use marquee::api::models::test_support::{movie_with_reviews, review_by};
//!
//! let movie = movie_with_reviews("m1", "Heat", vec![review_by("r1", "u1", "alice", "Tense")]);
//! assert_eq!(movie.reviews.len(), 1);
//! ```

use super::{Movie, MovieId, MoviePage, MovieSummary, Review, ReviewId, UserId};

/// Constructs a listing entry with only id and title set.
#[must_use]
pub fn summary(id: &str, title: &str) -> MovieSummary {
    MovieSummary {
        id: MovieId::new(id),
        title: title.to_owned(),
        ..MovieSummary::default()
    }
}

/// Constructs a page of `count` movies with ids `m{page}-{n}`.
#[must_use]
pub fn page_of(page: u32, count: usize) -> MoviePage {
    MoviePage {
        movies: (1..=count)
            .map(|n| summary(&format!("m{page}-{n}"), &format!("Movie {page}-{n}")))
            .collect(),
        page,
        entries_per_page: 20,
    }
}

/// Constructs a review with no date.
#[must_use]
pub fn review_by(id: &str, user_id: &str, author: &str, body: &str) -> Review {
    Review {
        id: ReviewId::new(id),
        author: author.to_owned(),
        user_id: UserId::new(user_id),
        date: None,
        body: body.to_owned(),
    }
}

/// Constructs a movie carrying `reviews`.
#[must_use]
pub fn movie_with_reviews(id: &str, title: &str, reviews: Vec<Review>) -> Movie {
    Movie {
        id: MovieId::new(id),
        title: title.to_owned(),
        reviews,
        ..Movie::default()
    }
}
