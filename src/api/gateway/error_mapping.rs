//! Error mapping helpers for the HTTP gateway.

use http::StatusCode;

use crate::api::error::ApiError;

/// Longest slice of a raw response body quoted in error messages.
const MAX_BODY_EXCERPT: usize = 160;

/// Maps a reqwest transport failure onto the API error taxonomy.
pub(super) fn map_transport_error(operation: &str, error: &reqwest::Error) -> ApiError {
    if error.is_decode() {
        return ApiError::Decode {
            message: format!("{operation} failed: {error}"),
        };
    }

    ApiError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

/// Maps a non-success HTTP status onto the API error taxonomy.
pub(super) fn map_status_error(operation: &str, status: StatusCode, body: &str) -> ApiError {
    let detail = extract_server_message(body);
    let message = format!("{operation} failed with status {status}: {detail}");

    if status == StatusCode::NOT_FOUND {
        ApiError::NotFound { message }
    } else if status.is_client_error() {
        ApiError::Validation { message }
    } else {
        ApiError::Server {
            status: status.as_u16(),
            message,
        }
    }
}

/// Extracts a human-readable message from an error response body.
///
/// The movie API reports failures as `{"error": "..."}`; `message` is
/// accepted as well. Anything else is quoted verbatim, truncated.
pub(super) fn extract_server_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "no response body".to_owned();
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed)
        && let Some(message) = ["error", "message"]
            .iter()
            .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
    {
        return message.to_owned();
    }

    truncate_for_message(trimmed, MAX_BODY_EXCERPT)
}

fn truncate_for_message(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}
