//! Error types for Dinner Dossier

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for content loading and preference handling
#[derive(Error, Debug)]
pub enum DossierError {
    /// A document or preference file could not be read or written
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A content document did not match the expected shape
    #[error("Malformed {document} document: {source}")]
    Parse {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Two roster entries share the same id
    #[error("Duplicate agent id: {0}")]
    DuplicateAgentId(String),

    /// A stat value does not fit a percentage bar
    #[error("Stat '{stat}' of agent {agent} is {value}, expected 0..=100")]
    StatOutOfRange {
        agent: String,
        stat: String,
        value: u32,
    },

    /// Unknown theme name
    #[error("Invalid theme: {0} (expected 'light' or 'dark')")]
    InvalidTheme(String),

    /// Preference file could not be encoded or decoded
    #[error("Preferences error: {0}")]
    Preferences(#[from] serde_json::Error),
}

/// Result type alias using DossierError
pub type DossierResult<T> = Result<T, DossierError>;
