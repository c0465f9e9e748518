// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for a11y-heuristics
//!
//! The checks themselves are total and never produce these; they only arise
//! at the edges (reading files, loading configuration, writing reports).

use thiserror::Error;

/// Main error type for a11y-heuristics
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
