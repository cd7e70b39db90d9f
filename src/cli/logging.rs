//! Tracing subscriber setup for the binary.
//!
//! Logs go to `log_file` when one is configured. Otherwise the one-shot
//! modes log to stderr and the TUI stays silent so nothing is written over
//! the alternate screen.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use marquee::{ApiError, MarqueeConfig, OperationMode};
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when neither `log_filter` nor `RUST_LOG` is set.
const DEFAULT_LOG_FILTER: &str = "marquee=info";

/// Installs the global subscriber for `config`.
///
/// # Errors
///
/// Returns [`ApiError::Io`] when the log file cannot be opened, or
/// [`ApiError::Configuration`] when the filter is invalid or a subscriber is
/// already installed.
pub fn init(config: &MarqueeConfig) -> Result<(), ApiError> {
    let filter = build_filter(config.log_filter.as_deref())?;

    let installed = match (config.log_file.as_deref(), config.operation_mode()) {
        (Some(path), _) => {
            let file = open_log_file(Path::new(path))?;
            fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        (None, OperationMode::BrowseTui) => return Ok(()),
        (None, _) => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init(),
    };

    installed.map_err(|error| ApiError::Configuration {
        message: format!("could not install logger: {error}"),
    })
}

/// Builds the filter from `directive`, then `RUST_LOG`, then the default.
///
/// # Errors
///
/// Returns [`ApiError::Configuration`] when `directive` does not parse.
pub fn build_filter(directive: Option<&str>) -> Result<EnvFilter, ApiError> {
    match directive {
        Some(value) => EnvFilter::try_new(value).map_err(|error| ApiError::Configuration {
            message: format!("invalid log filter '{value}': {error}"),
        }),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))),
    }
}

/// Opens `path` for appending, creating it when missing.
///
/// # Errors
///
/// Returns [`ApiError::Io`] when the file cannot be opened.
pub fn open_log_file(path: &Path) -> Result<File, ApiError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| ApiError::Io {
            message: format!("cannot open log file {}: {error}", path.display()),
        })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::{build_filter, open_log_file};

    #[rstest]
    fn log_file_is_appended() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("marquee.log");

        for line in ["first", "second"] {
            let mut file = open_log_file(&path).expect("log file should open");
            writeln!(file, "{line}").expect("write should succeed");
        }

        let contents = std::fs::read_to_string(&path).expect("log file should be readable");
        assert_eq!(contents, "first\nsecond\n");
    }

    #[rstest]
    fn directory_is_not_a_log_file() {
        let dir = TempDir::new().expect("temp dir should be created");

        let error = open_log_file(dir.path()).expect_err("directory should be rejected");

        assert!(error.to_string().contains("cannot open log file"));
    }

    #[rstest]
    #[case::crate_level("marquee=debug", true)]
    #[case::unknown_level("marquee=loud", false)]
    fn explicit_filter_is_validated(#[case] directive: &str, #[case] valid: bool) {
        assert_eq!(build_filter(Some(directive)).is_ok(), valid);
    }
}
