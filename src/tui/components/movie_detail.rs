//! Movie detail component showing one movie and its reviews.
//!
//! Renders the movie header, the wrapped plot, and either the review list
//! with owner-only actions or, while a draft is open, the draft editor.

use crate::api::{Movie, Review, User};
use crate::tui::state::{MovieDetailState, ReviewDraftMode, ReviewDraftState};

use super::text_wrap::wrap_text;

/// Indentation applied to review bodies.
const BODY_INDENT: &str = "    ";

/// Context for rendering the movie detail view.
#[derive(Debug, Clone)]
pub struct MovieDetailViewContext<'a> {
    /// Detail state holding the movie and review cursor.
    pub state: &'a MovieDetailState,
    /// Signed-in user, if any.
    pub user: Option<&'a User>,
    /// Open review draft, if any.
    pub draft: Option<&'a ReviewDraftState>,
    /// Available terminal width.
    pub max_width: usize,
    /// Maximum rows to render.
    pub max_height: usize,
}

/// Component for displaying a single movie.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovieDetailComponent;

impl MovieDetailComponent {
    /// Renders the detail view as a string.
    #[must_use]
    pub fn view(ctx: &MovieDetailViewContext<'_>) -> String {
        let Some(movie) = ctx.state.movie().filter(|_| !ctx.state.is_loading()) else {
            return "Loading movie...\n".to_owned();
        };

        let mut lines = header_lines(movie, ctx.max_width);
        let (body, selected_range) = match ctx.draft {
            Some(draft) => (draft_lines(draft, ctx.max_width), None),
            None => review_lines(ctx),
        };

        let header_len = lines.len();
        let available = ctx.max_height.saturating_sub(header_len);
        let offset = selected_range.map_or(0, |(_, end)| end.saturating_sub(available));
        lines.extend(body.into_iter().skip(offset));
        lines.truncate(ctx.max_height.max(header_len));

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }
}

fn header_lines(movie: &Movie, max_width: usize) -> Vec<String> {
    let mut lines = vec![movie.title.clone()];
    if let Some(rated) = movie.rated.as_deref() {
        lines.push(format!("Rating: {rated}"));
    }
    if let Some(poster) = movie.poster_detail() {
        lines.push(format!("Poster: {poster}"));
    }
    if let Some(plot) = movie.plot.as_deref() {
        lines.extend(wrap_text(plot, max_width));
    }
    lines.push(String::new());
    lines
}

/// Renders the reviews, returning the lines and the row range of the
/// selected review.
fn review_lines(ctx: &MovieDetailViewContext<'_>) -> (Vec<String>, Option<(usize, usize)>) {
    let mut lines = vec!["Reviews".to_owned()];
    if ctx.state.can_add(ctx.user) {
        lines.push("  [a] Add Review".to_owned());
    }

    let reviews = ctx.state.reviews();
    if reviews.is_empty() {
        lines.push("  No reviews yet.".to_owned());
        return (lines, None);
    }

    let body_width = ctx.max_width.saturating_sub(BODY_INDENT.len());
    let mut selected_range = None;
    for (index, review) in reviews.iter().enumerate() {
        let start = lines.len();
        let selected = index == ctx.state.cursor();
        push_review(&mut lines, review, selected, body_width);
        if ctx.state.can_modify(ctx.user, index) {
            lines.push(format!("{BODY_INDENT}[e] Edit  [d] Delete"));
        }
        if selected {
            selected_range = Some((start, lines.len()));
        }
    }
    (lines, selected_range)
}

fn push_review(lines: &mut Vec<String>, review: &Review, selected: bool, body_width: usize) {
    let prefix = if selected { ">" } else { " " };
    lines.push(format!(
        "{prefix} {} reviewed on {}",
        review.author,
        review.formatted_date()
    ));
    lines.extend(
        wrap_text(&review.body, body_width)
            .into_iter()
            .map(|line| format!("{BODY_INDENT}{line}")),
    );
}

fn draft_lines(draft: &ReviewDraftState, max_width: usize) -> Vec<String> {
    let heading = match draft.mode() {
        ReviewDraftMode::Create => "New review",
        ReviewDraftMode::Edit(_) => "Edit review",
    };
    let mut lines = vec![format!(
        "{heading} ({}/{} chars)",
        draft.char_count(),
        draft.max_length()
    )];
    let body_width = max_width.saturating_sub(BODY_INDENT.len());
    let mut text_lines = wrap_text(draft.text(), body_width);
    if text_lines.is_empty() {
        text_lines.push(String::new());
    }
    if let Some(last) = text_lines.last_mut() {
        last.push('_');
    }
    lines.extend(
        text_lines
            .into_iter()
            .map(|line| format!("{BODY_INDENT}{line}")),
    );
    lines
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};

    use super::{MovieDetailComponent, MovieDetailViewContext};
    use crate::api::models::test_support::{movie_with_reviews, review_by};
    use crate::api::{Movie, MovieId, Review, User};
    use crate::tui::state::{MovieDetailState, ReviewDraftState};

    fn loaded(movie: Movie) -> MovieDetailState {
        let mut state = MovieDetailState::new();
        let _tag = state.begin_load(movie.id.clone());
        state.apply(movie);
        state
    }

    fn render(state: &MovieDetailState, user: Option<&User>) -> String {
        MovieDetailComponent::view(&MovieDetailViewContext {
            state,
            user,
            draft: None,
            max_width: 80,
            max_height: 40,
        })
    }

    #[fixture]
    fn dated_review() -> Review {
        Review {
            date: Utc.with_ymd_and_hms(2021, 3, 5, 10, 15, 0).single(),
            ..review_by("r1", "u1", "alice", "Tense from start to finish.")
        }
    }

    #[rstest]
    fn shows_placeholder_before_the_movie_arrives() {
        let mut state = MovieDetailState::new();
        let _tag = state.begin_load(MovieId::new("m1"));

        assert_eq!(render(&state, None), "Loading movie...\n");
    }

    #[rstest]
    fn movie_without_reviews_shows_empty_state() {
        let state = loaded(movie_with_reviews("m1", "Heat", Vec::new()));

        let output = render(&state, None);

        assert!(output.contains("Heat"));
        assert!(output.contains("No reviews yet."));
    }

    #[rstest]
    fn review_header_names_author_and_date(dated_review: Review) {
        let state = loaded(movie_with_reviews("m1", "Heat", vec![dated_review]));

        let output = render(&state, None);

        assert!(output.contains("alice reviewed on 05 March 2021"));
        assert!(output.contains("    Tense from start to finish."));
    }

    #[rstest]
    fn poster_uses_detail_size() {
        let movie = Movie {
            poster: Some("https://img.example/heat".to_owned()),
            ..movie_with_reviews("m1", "Heat", Vec::new())
        };

        let output = render(&loaded(movie), None);

        assert!(output.contains("Poster: https://img.example/heat/150px250"));
    }

    #[rstest]
    fn actions_follow_ownership(dated_review: Review) {
        let state = loaded(movie_with_reviews(
            "m1",
            "Heat",
            vec![dated_review, review_by("r2", "u2", "bob", "Long")],
        ));
        let alice = User::new("u1", "alice");

        let signed_in = render(&state, Some(&alice));
        let anonymous = render(&state, None);

        assert_eq!(signed_in.matches("[e] Edit  [d] Delete").count(), 1);
        assert!(signed_in.contains("[a] Add Review"));
        assert!(!anonymous.contains("[e] Edit"));
        assert!(!anonymous.contains("[a] Add Review"));
    }

    #[rstest]
    fn open_draft_replaces_review_list(dated_review: Review) {
        let state = loaded(movie_with_reviews("m1", "Heat", vec![dated_review]));
        let mut draft = ReviewDraftState::create(MovieId::new("m1"), 100);
        assert!(draft.append_text("Great heist").is_ok());

        let output = MovieDetailComponent::view(&MovieDetailViewContext {
            state: &state,
            user: None,
            draft: Some(&draft),
            max_width: 80,
            max_height: 40,
        });

        assert!(output.contains("New review (11/100 chars)"));
        assert!(output.contains("    Great heist_"));
        assert!(!output.contains("alice reviewed on"));
    }
}
