use crate::error::{Result, SendError};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Text,
    Image,
    ImageWithCaption,
}

/// What gets delivered to every recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    text: Option<String>,
    image: Option<PathBuf>,
}

impl Content {
    pub fn new(text: Option<String>, image: Option<PathBuf>) -> Result<Self> {
        let text = text
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        if let Some(path) = image.as_ref() {
            if !path.is_file() {
                return Err(SendError::MissingImage(path.clone()));
            }
        }

        if text.is_none() && image.is_none() {
            return Err(SendError::EmptyContent);
        }

        Ok(Self { text, image })
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn image(&self) -> Option<&Path> {
        self.image.as_deref()
    }

    pub fn kind(&self) -> ContentKind {
        match (&self.text, &self.image) {
            (Some(_), Some(_)) => ContentKind::ImageWithCaption,
            (None, Some(_)) => ContentKind::Image,
            _ => ContentKind::Text,
        }
    }
}

impl ContentKind {
    pub fn label(self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Image => "image",
            ContentKind::ImageWithCaption => "image+text",
        }
    }
}
