//! Error type for loading keyboard diagrams and configuration.
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid keyboard template: {0}")]
    InvalidTemplate(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, DiagramError>;
