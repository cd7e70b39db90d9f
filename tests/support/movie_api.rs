//! Wiremock fixtures for the movie-reviews REST API.

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use super::runtime::SharedRuntime;

pub const MOVIES_PATH: &str = "/api/v1/movies";
pub const RATINGS_PATH: &str = "/api/v1/movies/ratings";
pub const REVIEW_PATH: &str = "/api/v1/movies/review";
const MOVIE_PATH_PREFIX: &str = "/api/v1/movies/id/";
const REVIEW_DATE: &str = "2024-03-01T12:00:00.000Z";

/// Priority of the first movie response; later fetches fall through.
const FIRST_FETCH_PRIORITY: u8 = 1;
/// Priority of a movie response that replaces the first after a mutation.
const REFETCH_PRIORITY: u8 = 5;
/// Priority of the unchanged movie response.
const FALLBACK_PRIORITY: u8 = 10;

/// A listing entry in the API's wire shape.
pub fn summary_json(id: &str, title: &str, rated: &str) -> Value {
    json!({ "_id": id, "title": title, "rated": rated })
}

/// A listing page holding `count` generated movies titled `Movie {page}-{n}`.
pub fn numbered_listing(page: usize, count: usize) -> Value {
    let movies: Vec<Value> = (1..=count)
        .map(|n| summary_json(&format!("p{page}-{n}"), &format!("Movie {page}-{n}"), "PG"))
        .collect();
    listing(page, movies)
}

/// A listing page in the API's wire shape.
pub fn listing(page: usize, movies: Vec<Value>) -> Value {
    json!({ "movies": movies, "page": page, "entries_per_page": 20 })
}

/// A review in the API's wire shape.
pub fn review_json(id: &str, author: &str, user_id: &str, body: &str) -> Value {
    json!({
        "_id": id,
        "name": author,
        "user_id": user_id,
        "date": REVIEW_DATE,
        "review": body,
    })
}

/// A movie with reviews in the API's wire shape.
pub fn movie_json(id: &str, title: &str, reviews: Vec<Value>) -> Value {
    json!({
        "_id": id,
        "title": title,
        "rated": "R",
        "plot": "A crew plans one last job.",
        "reviews": reviews,
    })
}

fn mount(runtime: &SharedRuntime, server: &MockServer, mock: Mock) {
    runtime.block_on(mock.mount(server));
}

pub fn mount_ratings(runtime: &SharedRuntime, server: &MockServer, ratings: &[&str]) {
    mount(
        runtime,
        server,
        Mock::given(method("GET"))
            .and(path(RATINGS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(ratings)),
    );
}

/// Serves `body` for every listing request asking for `page`.
pub fn mount_listing(runtime: &SharedRuntime, server: &MockServer, page: usize, body: Value) {
    mount(
        runtime,
        server,
        Mock::given(method("GET"))
            .and(path(MOVIES_PATH))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body)),
    );
}

pub fn mount_listing_failure(
    runtime: &SharedRuntime,
    server: &MockServer,
    page: usize,
    status: u16,
) {
    mount(
        runtime,
        server,
        Mock::given(method("GET"))
            .and(path(MOVIES_PATH))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(status).set_body_string("listing unavailable")),
    );
}

/// Serves `body` for the first fetch of movie `id` and every fetch after it
/// unless [`mount_movie_refetch`] supplies a replacement.
pub fn mount_movie(runtime: &SharedRuntime, server: &MockServer, id: &str, body: &Value) {
    let movie_path = format!("{MOVIE_PATH_PREFIX}{id}");
    mount(
        runtime,
        server,
        Mock::given(method("GET"))
            .and(path(movie_path.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .up_to_n_times(1)
            .with_priority(FIRST_FETCH_PRIORITY),
    );
    mount(
        runtime,
        server,
        Mock::given(method("GET"))
            .and(path(movie_path.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .with_priority(FALLBACK_PRIORITY),
    );
}

/// Serves `body` for fetches of movie `id` after the first one.
pub fn mount_movie_refetch(runtime: &SharedRuntime, server: &MockServer, id: &str, body: &Value) {
    mount(
        runtime,
        server,
        Mock::given(method("GET"))
            .and(path(format!("{MOVIE_PATH_PREFIX}{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .with_priority(REFETCH_PRIORITY),
    );
}

/// Accepts review mutations sent with `http_method`.
pub fn mount_review_mutation(runtime: &SharedRuntime, server: &MockServer, http_method: &str) {
    mount(
        runtime,
        server,
        Mock::given(method(http_method))
            .and(path(REVIEW_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" }))),
    );
}

/// Returns the value of query parameter `key` on `request`.
pub fn query_value(request: &Request, key: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}

/// Counts recorded requests matching `predicate`.
pub fn count_requests(
    runtime: &SharedRuntime,
    server: &MockServer,
    predicate: impl Fn(&Request) -> bool,
) -> usize {
    runtime
        .block_on(server.received_requests())
        .unwrap_or_default()
        .iter()
        .filter(|request| predicate(request))
        .count()
}

/// Checks whether `request` is a listing request.
pub fn is_listing(request: &Request) -> bool {
    request.method.as_str() == "GET" && request.url.path() == MOVIES_PATH
}

/// Checks whether `request` fetches a single movie.
pub fn is_movie_fetch(request: &Request) -> bool {
    request.method.as_str() == "GET" && request.url.path().starts_with(MOVIE_PATH_PREFIX)
}

/// Checks whether `request` is a review mutation sent with `http_method`.
pub fn is_review_mutation(request: &Request, http_method: &str) -> bool {
    request.method.as_str() == http_method && request.url.path() == REVIEW_PATH
}
