use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Changelog error: {0}")]
    Changelog(#[from] changelog::ChangelogError),

    #[error("Failed to serialize changelog: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to write {0}")]
    WriteFailed(PathBuf, #[source] std::io::Error),

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Changelog(err) => err.user_message(),
            Self::JsonError(err) => format!("Failed to serialize changelog: {err}"),
            Self::WriteFailed(path, err) => format!("Failed to write {}: {err}", path.display()),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
