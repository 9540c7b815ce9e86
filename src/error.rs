// Error types for Folio

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("book has no pages")]
    Empty,
    #[error("page {page} has an empty label")]
    EmptyLabel { page: usize },
    #[error("only one newsletter form is allowed, found one on pages {first} and {second}")]
    DuplicateNewsletter { first: usize, second: usize },
}

/// Failures of the page-turn feedback. Always swallowed by the caller.
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("no audio output device: {0}")]
    NoDevice(#[from] rodio::StreamError),
    #[error("audio playback failed: {0}")]
    Playback(#[from] rodio::PlayError),
    #[error("failed to start audio thread: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("audio output unavailable")]
    Unavailable,
}

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("invalid form address: {0}")]
    Url(#[from] url::ParseError),
    #[error("could not open {target}: {source}")]
    Open {
        target: String,
        #[source]
        source: std::io::Error,
    },
}
