use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisualizerError {
    #[error("cannot read config '{}': {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid toml in '{}': {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid value '{value}' in values list: {source}")]
    InvalidValue {
        value: String,
        source: std::num::ParseIntError,
    },
    #[error("sizes list is empty")]
    EmptySizes,
    #[error("value bound must be at least 1, got {0}")]
    InvalidValueBound(i64),
    #[error("failed to encode json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VisualizerError>;
