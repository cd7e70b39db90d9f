//! Shared helpers for `BrowseApp` unit tests.

use std::sync::Arc;

use bubbletea_rs::Cmd;

use super::BrowseApp;
use crate::api::gateway::{MockMovieGateway, MockReviewGateway};
use crate::api::{MovieCatalogue, User};
use crate::telemetry::test_support::RecordingTelemetrySink;
use crate::tui::messages::AppMsg;

/// Builds a catalogue over mocked gateways and a recording sink.
pub(super) fn catalogue_with(
    movies: MockMovieGateway,
    reviews: MockReviewGateway,
) -> (MovieCatalogue, Arc<RecordingTelemetrySink>) {
    let sink = Arc::new(RecordingTelemetrySink::default());
    let catalogue = MovieCatalogue::new(Arc::new(movies), Arc::new(reviews), Arc::clone(&sink) as _);
    (catalogue, sink)
}

/// Builds an app with a fixed 100x30 terminal.
pub(super) fn sized_app(catalogue: Option<MovieCatalogue>, user: Option<User>) -> BrowseApp {
    let mut app = BrowseApp::new(catalogue, user);
    app.handle_message(&AppMsg::WindowResized {
        width: 100,
        height: 30,
    });
    app
}

/// Runs a command and downcasts the message it produces.
pub(super) async fn resolve_cmd_to_app_msg(cmd: Cmd) -> Option<AppMsg> {
    let maybe_boxed = cmd.await?;
    maybe_boxed
        .downcast::<AppMsg>()
        .ok()
        .map(|message| *message)
}

/// Sends `msg`, runs the resulting command, and feeds its message back.
///
/// Returns the message the command produced. Any command issued in
/// response to that message is dropped without running.
pub(super) async fn dispatch_and_settle(app: &mut BrowseApp, msg: &AppMsg) -> Option<AppMsg> {
    let cmd = app.handle_message(msg)?;
    let produced = resolve_cmd_to_app_msg(cmd).await?;
    let _follow_up = app.handle_message(&produced);
    Some(produced)
}
