//! Tests for opening movies and deleting reviews.

use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::super::test_support::{
    catalogue_with, dispatch_and_settle, resolve_cmd_to_app_msg, sized_app,
};
use super::super::{BrowseApp, ViewMode};
use crate::api::gateway::{MockMovieGateway, MockReviewGateway};
use crate::api::models::test_support::{movie_with_reviews, page_of, review_by};
use crate::api::{
    ApiError, Movie, MovieCatalogue, MovieId, ReviewDeletion, ReviewId, User, UserId,
};
use crate::tui::messages::AppMsg;

#[fixture]
fn heat() -> Movie {
    movie_with_reviews(
        "m1",
        "Heat",
        vec![
            review_by("r1", "u1", "alice", "Tense"),
            review_by("r2", "u2", "bob", "Slow"),
            review_by("r3", "u1", "alice", "Again"),
        ],
    )
}

#[fixture]
fn alice() -> User {
    User::new("u1", "alice")
}

/// Builds an app already showing `movie` in the detail view.
fn app_showing(movie: Movie, catalogue: Option<MovieCatalogue>, user: Option<User>) -> BrowseApp {
    let mut app = sized_app(catalogue, user);
    let tag = app.detail.begin_load(movie.id.clone());
    app.view_mode = ViewMode::MovieDetail;
    app.handle_message(&AppMsg::MovieLoaded { movie, tag });
    app
}

fn review_ids(app: &BrowseApp) -> Vec<&str> {
    app.detail
        .reviews()
        .iter()
        .map(|review| review.id.as_str())
        .collect()
}

#[rstest]
#[tokio::test]
async fn opening_a_movie_fetches_its_details(heat: Movie) {
    let mut movies = MockMovieGateway::new();
    movies
        .expect_movie()
        .with(eq(MovieId::new("m0-1")))
        .times(1)
        .returning(move |_| Ok(heat.clone()));
    let (catalogue, _sink) = catalogue_with(movies, MockReviewGateway::new());
    let mut app = sized_app(Some(catalogue), None);
    app.handle_message(&AppMsg::MoviesLoaded {
        page: page_of(0, 2),
        tag: 0,
    });

    let produced = dispatch_and_settle(&mut app, &AppMsg::OpenSelectedMovie).await;

    assert!(matches!(produced, Some(AppMsg::MovieLoaded { .. })));
    assert!(app.is_showing_detail());
    assert_eq!(app.detail.movie().map(|movie| movie.title.as_str()), Some("Heat"));
    assert!(!app.loading);
}

#[rstest]
fn opening_shows_placeholder_until_loaded() {
    let mut app = sized_app(None, None);
    app.handle_message(&AppMsg::MoviesLoaded {
        page: page_of(0, 1),
        tag: 0,
    });

    app.handle_message(&AppMsg::OpenSelectedMovie);

    assert!(bubbletea_rs::Model::view(&app).contains("Loading movie..."));
}

#[rstest]
fn closing_discards_the_in_flight_movie(heat: Movie) {
    let mut app = sized_app(None, None);
    app.handle_message(&AppMsg::MoviesLoaded {
        page: page_of(0, 1),
        tag: 0,
    });
    app.handle_message(&AppMsg::OpenSelectedMovie);
    let tag = app.detail.generation();

    app.handle_message(&AppMsg::CloseDetail);
    app.handle_message(&AppMsg::MovieLoaded { movie: heat, tag });

    assert!(!app.is_showing_detail());
    assert!(app.detail.movie().is_none());
}

#[rstest]
fn failed_load_reports_error(heat: Movie) {
    let mut app = app_showing(heat, None, None);
    let tag = app.detail.begin_reload().map(|(_, tag)| tag).unwrap_or_default();

    app.handle_message(&AppMsg::MovieFailed {
        error: ApiError::NotFound {
            message: "m1".to_owned(),
        },
        tag,
    });

    assert!(app.error_message().is_some_and(|e| e.contains("not found")));
    assert_eq!(review_ids(&app), vec!["r1", "r2", "r3"]);
}

#[rstest]
fn search_keys_are_ignored_in_detail_view(heat: Movie) {
    let mut app = app_showing(heat, None, None);

    app.handle_message(&AppMsg::TitleInputChar('x'));
    app.handle_message(&AppMsg::NextPage);

    assert_eq!(app.search.title_input(), "");
    assert_eq!(app.search.page(), 0);
}

#[rstest]
#[tokio::test]
async fn deleting_own_review_removes_only_that_review(heat: Movie, alice: User) {
    let mut reviews = MockReviewGateway::new();
    reviews
        .expect_delete_review()
        .with(eq(ReviewDeletion {
            review_id: ReviewId::new("r3"),
            user_id: UserId::new("u1"),
        }))
        .times(1)
        .returning(|_| Ok(()));
    let (catalogue, _sink) = catalogue_with(MockMovieGateway::new(), reviews);
    let mut app = app_showing(heat, Some(catalogue), Some(alice));
    app.handle_message(&AppMsg::End);

    let produced = dispatch_and_settle(&mut app, &AppMsg::DeleteSelectedReview).await;

    assert!(matches!(produced, Some(AppMsg::ReviewDeleted { index: 2, .. })));
    assert_eq!(review_ids(&app), vec!["r1", "r2"]);
    assert_eq!(app.detail.cursor(), 1);
}

#[rstest]
#[tokio::test]
async fn delete_is_sent_once_while_pending(heat: Movie, alice: User) {
    let mut reviews = MockReviewGateway::new();
    reviews.expect_delete_review().times(1).returning(|_| Ok(()));
    let (catalogue, _sink) = catalogue_with(MockMovieGateway::new(), reviews);
    let mut app = app_showing(heat, Some(catalogue), Some(alice));

    let Some(first) = app.handle_message(&AppMsg::DeleteSelectedReview) else {
        panic!("first delete should be sent");
    };
    assert!(app.handle_message(&AppMsg::DeleteSelectedReview).is_none());

    let produced = resolve_cmd_to_app_msg(first).await;
    if let Some(deleted) = produced.as_ref() {
        app.handle_message(deleted);
    }

    assert_eq!(review_ids(&app), vec!["r2", "r3"]);
    assert!(app.error_message().is_none());
}

#[rstest]
fn deleting_someone_elses_review_is_ignored(heat: Movie, alice: User) {
    // No expectations: a delete call would panic.
    let (catalogue, _sink) = catalogue_with(MockMovieGateway::new(), MockReviewGateway::new());
    let mut app = app_showing(heat, Some(catalogue), Some(alice));
    app.handle_message(&AppMsg::CursorDown);

    assert!(app.handle_message(&AppMsg::DeleteSelectedReview).is_none());
    assert_eq!(review_ids(&app).len(), 3);
}

#[rstest]
fn anonymous_users_cannot_delete(heat: Movie) {
    let (catalogue, _sink) = catalogue_with(MockMovieGateway::new(), MockReviewGateway::new());
    let mut app = app_showing(heat, Some(catalogue), None);

    assert!(app.handle_message(&AppMsg::DeleteSelectedReview).is_none());
}

#[rstest]
#[tokio::test]
async fn failed_delete_keeps_review_and_shows_error(heat: Movie, alice: User) {
    let mut reviews = MockReviewGateway::new();
    reviews.expect_delete_review().times(1).returning(|_| {
        Err(ApiError::Server {
            status: 500,
            message: "boom".to_owned(),
        })
    });
    let (catalogue, _sink) = catalogue_with(MockMovieGateway::new(), reviews);
    let mut app = app_showing(heat, Some(catalogue), Some(alice));

    dispatch_and_settle(&mut app, &AppMsg::DeleteSelectedReview).await;

    assert_eq!(review_ids(&app).len(), 3);
    assert!(app.error_message().is_some_and(|e| e.contains("server error 500")));
}

#[rstest]
fn deleted_review_is_found_by_id_after_list_shifts(heat: Movie) {
    let mut app = app_showing(heat, None, None);

    app.handle_message(&AppMsg::ReviewDeleted {
        movie_id: MovieId::new("m1"),
        review_id: ReviewId::new("r3"),
        index: 0,
    });

    assert_eq!(review_ids(&app), vec!["r1", "r2"]);
}

#[rstest]
fn deletion_for_another_movie_is_ignored(heat: Movie) {
    let mut app = app_showing(heat, None, None);

    app.handle_message(&AppMsg::ReviewDeleted {
        movie_id: MovieId::new("m2"),
        review_id: ReviewId::new("r1"),
        index: 0,
    });

    assert_eq!(review_ids(&app).len(), 3);
}
