//! Review-draft configuration storage and defaults for TUI startup.

use std::sync::OnceLock;

/// Global storage for review-drafting configuration.
///
/// This is set before TUI startup from CLI/config sources. When not provided,
/// the application falls back to built-in defaults.
static REVIEW_DRAFT_CONFIG: OnceLock<ReviewDraftConfig> = OnceLock::new();

/// Static fallback review-drafting configuration.
static DEFAULT_REVIEW_DRAFT_CONFIG: OnceLock<ReviewDraftConfig> = OnceLock::new();

/// Configuration for review drafting inside the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraftConfig {
    /// Maximum character count for review drafts.
    pub max_length: usize,
    /// Ordered template list mapped to keys `F1`-`F9`.
    pub templates: Vec<String>,
}

impl Default for ReviewDraftConfig {
    fn default() -> Self {
        Self {
            max_length: crate::config::DEFAULT_REVIEW_MAX_LENGTH,
            templates: crate::config::default_review_templates(),
        }
    }
}

impl ReviewDraftConfig {
    /// Creates a review-drafting config, raising a zero length to one.
    #[must_use]
    pub fn new(max_length: usize, templates: Vec<String>) -> Self {
        Self {
            max_length: max_length.max(1),
            templates,
        }
    }
}

/// Sets review-drafting configuration for TUI startup.
///
/// Returns `true` when the value is set for the first time, or `false` when a
/// prior value already exists.
pub fn set_review_draft_config(config: ReviewDraftConfig) -> bool {
    REVIEW_DRAFT_CONFIG
        .set(ReviewDraftConfig::new(config.max_length, config.templates))
        .is_ok()
}

/// Gets review-drafting configuration, falling back to defaults.
pub(crate) fn get_review_draft_config() -> ReviewDraftConfig {
    REVIEW_DRAFT_CONFIG.get().cloned().unwrap_or_else(|| {
        DEFAULT_REVIEW_DRAFT_CONFIG
            .get_or_init(ReviewDraftConfig::default)
            .clone()
    })
}
