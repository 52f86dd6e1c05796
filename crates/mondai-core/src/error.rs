//! Error type shared by corpus loading, configuration and knowledge adapters.

use std::path::PathBuf;

/// Result type for knowledge operations.
pub type KnowledgeResult<T> = Result<T, KnowledgeError>;

/// Errors raised while loading knowledge bases or configuration.
///
/// Search failures (`SearchFailed`) are the only variant the router ever sees at
/// query time, and it never lets them reach the caller.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("failed to parse {kb} corpus: {source}")]
    Parse {
        kb: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read corpus file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid item in {kb} corpus: {reason}")]
    InvalidItem { kb: &'static str, reason: String },

    #[error("duplicate id '{id}' in {kb} corpus")]
    DuplicateId { kb: &'static str, id: String },

    #[error("{kb} search failed: {reason}")]
    SearchFailed { kb: String, reason: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for KnowledgeError {
    fn from(e: config::ConfigError) -> Self {
        KnowledgeError::Config(e.to_string())
    }
}
