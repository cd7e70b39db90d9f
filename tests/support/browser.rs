//! Drives a `BrowseApp` the way the bubbletea program loop would.

use std::sync::Arc;
use std::time::Duration;

use bubbletea_rs::event::KeyMsg;
use bubbletea_rs::{Cmd, Model};
use crossterm::event::{KeyCode, KeyModifiers};
use marquee::telemetry::NoopTelemetrySink;
use marquee::tui::BrowseApp;
use marquee::tui::messages::AppMsg;
use marquee::{ApiBaseUrl, ApiError, MovieCatalogue, User};

use super::runtime::SharedRuntime;

/// Commands produced in response to one input that are run before giving
/// control back to the test.
const MAX_FOLLOW_UPS: usize = 8;

/// Builds a browser talking to the mock server at `uri` and runs startup.
///
/// # Errors
///
/// Returns an error when the server URI is rejected or the HTTP client
/// cannot be built.
pub fn start_browser(
    runtime: &SharedRuntime,
    uri: &str,
    user: Option<User>,
) -> Result<BrowseApp, ApiError> {
    let base_url = ApiBaseUrl::parse(uri)?;
    let catalogue = runtime.enter(|| {
        MovieCatalogue::http(base_url, Duration::from_secs(5), Arc::new(NoopTelemetrySink))
    })?;
    let mut app = BrowseApp::new(Some(catalogue), user);
    send(
        &mut app,
        runtime,
        AppMsg::WindowResized {
            width: 100,
            height: 30,
        },
    );
    send(&mut app, runtime, AppMsg::Initialized);
    Ok(app)
}

/// Runs `cmd` and every command its messages produce, feeding each message
/// back into `app`.
pub fn settle(app: &mut BrowseApp, runtime: &SharedRuntime, cmd: Option<Cmd>) {
    let mut pending = cmd;
    for _ in 0..MAX_FOLLOW_UPS {
        let Some(next) = pending.take() else {
            return;
        };
        let Some(msg) = runtime.block_on(next) else {
            return;
        };
        pending = app.update(msg);
    }
}

pub fn send(app: &mut BrowseApp, runtime: &SharedRuntime, msg: AppMsg) {
    let cmd = app.update(Box::new(msg));
    settle(app, runtime, cmd);
}

pub fn press(app: &mut BrowseApp, runtime: &SharedRuntime, key: KeyCode) {
    let cmd = app.update(Box::new(KeyMsg {
        key,
        modifiers: KeyModifiers::NONE,
    }));
    settle(app, runtime, cmd);
}

pub fn type_text(app: &mut BrowseApp, runtime: &SharedRuntime, text: &str) {
    for character in text.chars() {
        press(app, runtime, KeyCode::Char(character));
    }
}

/// Parses a key name used in feature files.
///
/// Single characters map to themselves; `enter`, `escape`, `up`, and
/// `down` name the special keys.
pub fn parse_key(name: &str) -> Option<KeyCode> {
    match name {
        "enter" => Some(KeyCode::Enter),
        "escape" => Some(KeyCode::Esc),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        _ => {
            let mut characters = name.chars();
            let first = characters.next()?;
            characters.next().is_none().then_some(KeyCode::Char(first))
        }
    }
}
