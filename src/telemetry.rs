//! Application telemetry events and sinks.
//!
//! Marquee keeps no metrics backend, but records lightweight structured
//! events for debugging request behaviour: how long calls take, which ones
//! fail, and which responses arrive too late to be shown.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by Marquee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// An API request completed successfully.
    RequestCompleted {
        /// Operation name (e.g. `list movies`).
        operation: String,
        /// Wall-clock duration of the request in milliseconds.
        latency_ms: u64,
    },
    /// An API request failed.
    RequestFailed {
        /// Operation name (e.g. `get movie`).
        operation: String,
        /// Short error category (`not_found`, `network`, ...).
        error_kind: String,
        /// HTTP status reported by the server, if the failure carried one.
        status: Option<u16>,
        /// Rendered error message.
        message: String,
    },
    /// A response arrived after the view had moved on and was dropped.
    StaleResponseDiscarded {
        /// Operation the response belonged to.
        operation: String,
        /// Generation the request was tagged with.
        request_generation: u64,
        /// Generation of the state when the response arrived.
        current_generation: u64,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// Intended for local debugging of the one-shot CLI modes; the TUI never
/// installs it because stderr shares the terminal with the alternate screen.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Telemetry helpers for tests.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every recorded event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns a copy of the events recorded so far.
        #[must_use]
        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|events| events.clone())
                .unwrap_or_default()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }
    }
}
