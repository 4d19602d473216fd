use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogoFxError {
    #[error("Failed to load image: {0}")]
    ImageLoad(#[from] image::ImageError),

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Layer dimensions differ: top is {top:?}, bottom is {bottom:?}")]
    DimensionMismatch { top: (u32, u32), bottom: (u32, u32) },

    #[error("Invalid rule '{name}': {source}")]
    InvalidRule {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid configuration in rule '{name}': {reason}")]
    InvalidConfig { name: String, reason: String },

    #[error("Unsupported rule file format. Please use .toml or .json files")]
    UnsupportedRuleFormat,

    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LogoFxError>;
