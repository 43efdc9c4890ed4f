use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} is not an existing directory")]
    OutputDirectoryMissing(PathBuf),

    #[error("malformed timestamp: {0:?}")]
    MalformedTimestamp(String),

    #[error("no `h2 a` title element found")]
    MissingTitle,

    /// Output names need `year/month/_/slug/file`.
    #[error("path has fewer than five components: {0}")]
    PathTooShort(PathBuf),

    #[error("conversion failed: {0}")]
    ConversionFailure(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Config(#[from] toml::de::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
