//! State for the single-movie detail view.
//!
//! The detail view holds at most one movie. Loads are tagged with a
//! generation so a slow response for a movie the user has already left
//! cannot replace what is on screen.

use crate::api::{Movie, MovieId, Review, ReviewId, User};

/// Detail view state: the loaded movie, its load generation, and the
/// review cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieDetailState {
    movie_id: Option<MovieId>,
    movie: Option<Movie>,
    generation: u64,
    cursor: usize,
}

impl MovieDetailState {
    /// Creates an empty detail state with nothing loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of the movie being shown or loaded.
    #[must_use]
    pub const fn movie_id(&self) -> Option<&MovieId> {
        self.movie_id.as_ref()
    }

    /// Returns the loaded movie, if any.
    #[must_use]
    pub const fn movie(&self) -> Option<&Movie> {
        self.movie.as_ref()
    }

    /// Returns true while no movie with a title has arrived.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.movie.as_ref().is_none_or(|movie| movie.title.is_empty())
    }

    /// Returns the current generation.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the reviews of the loaded movie.
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        self.movie
            .as_ref()
            .map(|movie| movie.reviews.as_slice())
            .unwrap_or_default()
    }

    /// Returns the review cursor position.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the review under the cursor.
    #[must_use]
    pub fn selected_review(&self) -> Option<&Review> {
        self.reviews().get(self.cursor)
    }

    /// Starts loading `movie_id`, dropping whatever was shown before.
    ///
    /// Returns the tag the load response must carry.
    pub fn begin_load(&mut self, movie_id: MovieId) -> u64 {
        self.movie_id = Some(movie_id);
        self.movie = None;
        self.cursor = 0;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Starts a re-fetch of the current movie while keeping it on screen.
    ///
    /// Returns `None` when no movie is selected.
    pub fn begin_reload(&mut self) -> Option<(MovieId, u64)> {
        let movie_id = self.movie_id.clone()?;
        self.generation = self.generation.wrapping_add(1);
        Some((movie_id, self.generation))
    }

    /// Returns true when a response tagged `tag` still matches this view.
    #[must_use]
    pub const fn accepts(&self, tag: u64) -> bool {
        tag == self.generation
    }

    /// Installs a loaded movie and clamps the cursor to its reviews.
    pub fn apply(&mut self, movie: Movie) {
        self.movie_id = Some(movie.id.clone());
        self.movie = Some(movie);
        self.clamp_cursor();
    }

    /// Leaves the detail view; any in-flight load becomes stale.
    pub fn clear(&mut self) {
        self.movie_id = None;
        self.movie = None;
        self.cursor = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Moves the review cursor up one position.
    pub const fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the review cursor down one position.
    pub fn cursor_down(&mut self) {
        let max_index = self.reviews().len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add(1).min(max_index);
    }

    /// Removes exactly the review at `index` without re-fetching.
    ///
    /// Returns the removed review, or `None` when `index` is out of range.
    pub fn remove_review_at(&mut self, index: usize) -> Option<Review> {
        let movie = self.movie.as_mut()?;
        if index >= movie.reviews.len() {
            return None;
        }
        let removed = movie.reviews.remove(index);
        self.clamp_cursor();
        Some(removed)
    }

    /// Returns the position of the review with `review_id`.
    #[must_use]
    pub fn position_of(&self, review_id: &ReviewId) -> Option<usize> {
        self.reviews()
            .iter()
            .position(|review| &review.id == review_id)
    }

    /// Replaces the review with the same id in place, or appends it.
    pub fn upsert_review(&mut self, review: Review) {
        let Some(movie) = self.movie.as_mut() else {
            return;
        };
        match movie
            .reviews
            .iter_mut()
            .find(|existing| existing.id == review.id)
        {
            Some(existing) => *existing = review,
            None => movie.reviews.push(review),
        }
    }

    /// Returns true when `user` may edit or delete the review at `index`.
    ///
    /// Reviews without a server-assigned id are shown until the reload
    /// arrives but cannot be modified.
    #[must_use]
    pub fn can_modify(&self, user: Option<&User>, index: usize) -> bool {
        let Some(signed_in) = user else {
            return false;
        };
        self.reviews().get(index).is_some_and(|review| {
            !review.id.as_str().is_empty() && review.is_owned_by(signed_in)
        })
    }

    /// Returns true when `user` may add a review to the loaded movie.
    #[must_use]
    pub fn can_add(&self, user: Option<&User>) -> bool {
        user.is_some() && !self.is_loading()
    }

    fn clamp_cursor(&mut self) {
        let max_index = self.reviews().len().saturating_sub(1);
        self.cursor = self.cursor.min(max_index);
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::MovieDetailState;
    use crate::api::models::test_support::{movie_with_reviews, review_by};
    use crate::api::{Movie, MovieId, Review, ReviewId, User};

    #[fixture]
    fn movie() -> Movie {
        movie_with_reviews(
            "m1",
            "Heat",
            vec![
                review_by("r1", "u1", "alice", "Tense"),
                review_by("r2", "u2", "bob", "Long"),
                review_by("r3", "u1", "alice", "Again"),
            ],
        )
    }

    #[fixture]
    fn loaded(movie: Movie) -> MovieDetailState {
        let mut state = MovieDetailState::new();
        let tag = state.begin_load(MovieId::new("m1"));
        assert!(state.accepts(tag));
        state.apply(movie);
        state
    }

    #[rstest]
    fn loading_until_a_titled_movie_arrives() {
        let mut state = MovieDetailState::new();
        let _tag = state.begin_load(MovieId::new("m1"));
        assert!(state.is_loading());

        state.apply(movie_with_reviews("m1", "", Vec::new()));
        assert!(state.is_loading());

        state.apply(movie_with_reviews("m1", "Heat", Vec::new()));
        assert!(!state.is_loading());
    }

    #[rstest]
    fn navigating_away_makes_earlier_loads_stale() {
        let mut state = MovieDetailState::new();
        let first = state.begin_load(MovieId::new("m1"));
        let second = state.begin_load(MovieId::new("m2"));

        assert!(!state.accepts(first));
        assert!(state.accepts(second));

        state.clear();
        assert!(!state.accepts(second));
    }

    #[rstest]
    #[case(0, &["r2", "r3"])]
    #[case(1, &["r1", "r3"])]
    #[case(2, &["r1", "r2"])]
    fn remove_review_at_removes_exactly_one(
        mut loaded: MovieDetailState,
        #[case] index: usize,
        #[case] remaining: &[&str],
    ) {
        let removed = loaded.remove_review_at(index);

        assert!(removed.is_some());
        let ids: Vec<_> = loaded.reviews().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, remaining);
    }

    #[rstest]
    fn remove_review_out_of_range_changes_nothing(mut loaded: MovieDetailState) {
        assert_eq!(loaded.remove_review_at(3), None);
        assert_eq!(loaded.reviews().len(), 3);
    }

    #[rstest]
    fn removing_last_review_clamps_cursor(mut loaded: MovieDetailState) {
        loaded.cursor_down();
        loaded.cursor_down();
        assert_eq!(loaded.cursor(), 2);

        let _removed = loaded.remove_review_at(2);

        assert_eq!(loaded.cursor(), 1);
    }

    #[rstest]
    fn upsert_replaces_in_place_or_appends(mut loaded: MovieDetailState) {
        loaded.upsert_review(review_by("r2", "u2", "bob", "Shorter than I said"));
        loaded.upsert_review(review_by("r4", "u3", "carol", "New"));

        let bodies: Vec<_> = loaded.reviews().iter().map(|r| r.body.as_str()).collect();
        assert_eq!(bodies, vec!["Tense", "Shorter than I said", "Again", "New"]);
        assert_eq!(loaded.position_of(&ReviewId::new("r4")), Some(3));
    }

    #[rstest]
    fn only_owners_may_modify(loaded: MovieDetailState) {
        let alice = User::new("u1", "alice");

        assert!(loaded.can_modify(Some(&alice), 0));
        assert!(!loaded.can_modify(Some(&alice), 1));
        assert!(!loaded.can_modify(None, 0));
    }

    #[rstest]
    fn unsaved_review_cannot_be_modified(mut loaded: MovieDetailState) {
        let alice = User::new("u1", "alice");
        loaded.upsert_review(Review {
            id: ReviewId::default(),
            ..review_by("r9", "u1", "alice", "Pending")
        });

        let pending = loaded.position_of(&ReviewId::default());
        assert_eq!(pending, Some(3));
        assert!(!loaded.can_modify(Some(&alice), 3));
        assert!(loaded.can_modify(Some(&alice), 0));
    }

    #[rstest]
    fn adding_requires_a_user(loaded: MovieDetailState) {
        assert!(loaded.can_add(Some(&User::new("u9", "zed"))));
        assert!(!loaded.can_add(None));
    }
}
