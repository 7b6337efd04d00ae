use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChainError {
    #[error("Failed to write announcement: {0}")]
    Write(#[from] io::Error),

    #[error("Failed to parse message table: {message}")]
    Messages { message: String },

    #[error("Message '{key}' must not be empty")]
    EmptyMessage { key: String },

    #[error("Message '{key}' must fit on a single line")]
    MultiLineMessage { key: String },
}

impl ChainError {
    pub fn messages(message: impl Into<String>) -> Self {
        Self::Messages {
            message: message.into(),
        }
    }

    pub fn empty_message(key: impl Into<String>) -> Self {
        Self::EmptyMessage { key: key.into() }
    }

    pub fn multi_line_message(key: impl Into<String>) -> Self {
        Self::MultiLineMessage { key: key.into() }
    }
}

impl From<toml::de::Error> for ChainError {
    fn from(err: toml::de::Error) -> Self {
        ChainError::messages(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ChainError>;
