use logic_parser::ParseError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown notation: {0}")]
    UnknownNotation(String),

    #[error("cannot parse formula: {0}")]
    Parse(#[from] ParseError),

    #[error("formula cannot be used as a cache key: {0:?}")]
    InvalidKey(String),

    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("corrupt cache entry: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("unknown notation in config: {0}")]
    UnknownNotation(String),

    #[error("file backend needs a data_root")]
    MissingDataRoot,

    #[error("data_root {0} is not a directory")]
    NotADirectory(PathBuf),
}
