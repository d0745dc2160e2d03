// SPDX-License-Identifier: MPL-2.0
use crate::application::port::ai::ModelError;
use crate::domain::error::PayloadError;
use crate::media::data_url::FormatError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The selected file could not be read or is not a usable image.
    #[error("Upload Error: {0}")]
    Upload(String),

    #[error("Format Error: {0}")]
    Format(#[from] FormatError),

    #[error("Payload Error: {0}")]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Model(#[from] ModelError),

    /// The current image could not be decoded for flattening.
    #[error("Export Error: {0}")]
    Export(String),
}

impl Error {
    /// Message shown to the user when this error ends a session transition.
    ///
    /// Model refusals keep their reason; everything else falls back to the
    /// error's display text.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Error::Model(err) => err.user_message(),
            other => other.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Export(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
