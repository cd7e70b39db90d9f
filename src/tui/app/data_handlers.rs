//! Request commands and response handlers for movie data.
//!
//! Every request carries the generation of the state that issued it. A
//! response whose generation no longer matches is discarded so a slow reply
//! can never overwrite newer results.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::{BrowseApp, CATALOGUE_MISSING, ViewMode};
use crate::api::{ApiError, Movie, MovieId, MoviePage};
use crate::tui::messages::AppMsg;
use crate::tui::state::SearchRequest;

/// Operation name recorded when a list response is discarded.
const LIST_OPERATION: &str = "list movies";
/// Operation name recorded when a movie response is discarded.
const MOVIE_OPERATION: &str = "get movie";

impl BrowseApp {
    /// Dispatches data loading messages to their handlers.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::ReloadRequested => self.handle_reload_requested(),
            AppMsg::StartupLoaded {
                ratings,
                movies,
                tag,
            } => self.handle_startup_loaded(ratings, movies, *tag),
            AppMsg::MoviesLoaded { page, tag } => self.handle_movies_loaded(page, *tag),
            AppMsg::MoviesFailed { error, tag } => self.handle_movies_failed(error, *tag),
            AppMsg::MovieLoaded { movie, tag } => self.handle_movie_loaded(movie, *tag),
            AppMsg::MovieFailed { error, tag } => self.handle_movie_failed(error, *tag),
            _ => {
                // Unreachable: caller filters to data messages.
                None
            }
        }
    }

    /// Builds the command that loads the rating labels and the first page.
    ///
    /// Both requests run concurrently and arrive as one message so the
    /// selector and the list are populated together.
    pub(super) fn startup_cmd(&mut self) -> Option<Cmd> {
        let Some(catalogue) = self.catalogue.clone() else {
            self.error = Some(CATALOGUE_MISSING.to_owned());
            return None;
        };
        let request = self.search.current_request();
        self.loading = true;

        Some(Box::pin(async move {
            let (ratings, movies) = tokio::join!(
                catalogue.ratings(),
                catalogue.list_movies(&request.query)
            );
            Some(Box::new(AppMsg::StartupLoaded {
                ratings,
                movies,
                tag: request.tag,
            }) as Box<dyn Any + Send>)
        }))
    }

    /// Builds the command for one list request.
    pub(super) fn spawn_list_request(&mut self, request: SearchRequest) -> Option<Cmd> {
        let Some(catalogue) = self.catalogue.clone() else {
            self.error = Some(CATALOGUE_MISSING.to_owned());
            return None;
        };
        self.loading = true;

        Some(Box::pin(async move {
            let msg = match catalogue.list_movies(&request.query).await {
                Ok(page) => AppMsg::MoviesLoaded {
                    page,
                    tag: request.tag,
                },
                Err(error) => AppMsg::MoviesFailed {
                    error,
                    tag: request.tag,
                },
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        }))
    }

    /// Builds the command that fetches one movie with its reviews.
    pub(super) fn spawn_movie_request(&mut self, movie_id: MovieId, tag: u64) -> Option<Cmd> {
        let Some(catalogue) = self.catalogue.clone() else {
            self.error = Some(CATALOGUE_MISSING.to_owned());
            return None;
        };
        self.loading = true;

        Some(Box::pin(async move {
            let msg = match catalogue.movie(&movie_id).await {
                Ok(movie) => AppMsg::MovieLoaded { movie, tag },
                Err(error) => AppMsg::MovieFailed { error, tag },
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        }))
    }

    /// Re-issues the request behind the active view.
    fn handle_reload_requested(&mut self) -> Option<Cmd> {
        self.error = None;
        match self.view_mode {
            ViewMode::MovieList => {
                let request = self.search.current_request();
                self.spawn_list_request(request)
            }
            ViewMode::MovieDetail => {
                let (movie_id, tag) = self.detail.begin_reload()?;
                self.spawn_movie_request(movie_id, tag)
            }
        }
    }

    fn handle_startup_loaded(
        &mut self,
        ratings: &Result<Vec<String>, ApiError>,
        movies: &Result<MoviePage, ApiError>,
        tag: u64,
    ) -> Option<Cmd> {
        let movies_cmd = match movies {
            Ok(page) => self.handle_movies_loaded(page, tag),
            Err(error) => self.handle_movies_failed(error, tag),
        };
        match ratings {
            Ok(labels) => self.search.set_rating_labels(labels.clone()),
            Err(error) => self.error = Some(error.to_string()),
        }
        movies_cmd
    }

    fn handle_movies_loaded(&mut self, page: &MoviePage, tag: u64) -> Option<Cmd> {
        if !self.search.accepts(tag) {
            self.discard_stale(LIST_OPERATION, tag, self.search.generation());
            return None;
        }
        self.show_movies(page.movies.clone(), page.page, page.entries_per_page);
        self.loading = false;
        self.error = None;
        None
    }

    /// Reports a failed list request and keeps the displayed movies.
    fn handle_movies_failed(&mut self, error: &ApiError, tag: u64) -> Option<Cmd> {
        if !self.search.accepts(tag) {
            self.discard_stale(LIST_OPERATION, tag, self.search.generation());
            return None;
        }
        self.loading = false;
        self.error = Some(error.to_string());
        None
    }

    fn handle_movie_loaded(&mut self, movie: &Movie, tag: u64) -> Option<Cmd> {
        if !self.detail.accepts(tag) {
            self.discard_stale(MOVIE_OPERATION, tag, self.detail.generation());
            return None;
        }
        self.detail.apply(movie.clone());
        self.loading = false;
        self.error = None;
        None
    }

    /// Reports a failed movie request and keeps any previously shown movie.
    fn handle_movie_failed(&mut self, error: &ApiError, tag: u64) -> Option<Cmd> {
        if !self.detail.accepts(tag) {
            self.discard_stale(MOVIE_OPERATION, tag, self.detail.generation());
            return None;
        }
        self.loading = false;
        self.error = Some(error.to_string());
        None
    }

    fn discard_stale(&self, operation: &str, request_generation: u64, current_generation: u64) {
        if let Some(catalogue) = &self.catalogue {
            catalogue.discard_stale(operation, request_generation, current_generation);
        }
    }
}
