use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SendError {
    #[error("either message text or an image must be provided")]
    EmptyContent,
    #[error("image not found: {0}")]
    MissingImage(PathBuf),
    #[error("invalid base url: {0}")]
    Url(#[from] url::ParseError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("opener command failed: {0}")]
    Command(String),
    #[error("{deliverer} cannot deliver {kind} content")]
    UnsupportedContent {
        deliverer: &'static str,
        kind: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, SendError>;
