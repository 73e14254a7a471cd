//! Errors raised while loading configuration and page descriptions.
//!
//! The widget itself never fails; these only surface at the loading
//! boundary.

use thiserror::Error;

/// Widget configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid cross-select configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// A page description or scripted input could not be used.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("invalid page description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no element with id '{0}'")]
    MissingElement(String),
}

/// Top-level error for loading and running an enhanced page.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Page(#[from] PageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
