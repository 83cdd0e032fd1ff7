//! Error type for the strip pipeline.
//!
//! Every stage returns `Result<T, StripError>`; only the CLI entry point
//! decides to terminate the process.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of one pipeline stage.
#[derive(Debug, Error)]
pub enum StripError {
    /// Anything other than exactly one argument after the program name.
    #[error("One argument required - the date in format yyyy-mm-dd")]
    ArgCount,

    /// The single argument is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid date provided")]
    InvalidDate,

    /// curl could not complete the request (DNS, connect, timeout, ...).
    #[error(transparent)]
    Transport(#[from] curl::Error),

    /// The strip page answered with a non-2xx status; the site redirects
    /// unknown dates to its homepage, so a 3xx lands here too.
    #[error("404 - Page Not Found")]
    PageNotFound { status: u32 },

    /// The page was fetched but carries no `data-image` asset address.
    #[error("Failed to find image path")]
    ImagePathNotFound,

    /// The image address answered with a non-2xx status.
    #[error("image not found (HTTP {status})")]
    ImageNotFound { status: u32 },

    /// The image address answered 2xx with an empty body.
    #[error("image response was empty")]
    EmptyImage,

    /// Writing or renaming the saved strip failed.
    #[error("storage: {}: {error}", path.display())]
    Storage { path: PathBuf, error: std::io::Error },
}

/// Discriminant of [`StripError`], for comparing failures by class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ArgCount,
    InvalidDate,
    Transport,
    PageNotFound,
    ImagePathNotFound,
    ImageNotFound,
    EmptyImage,
    Storage,
}

impl StripError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StripError::ArgCount => ErrorKind::ArgCount,
            StripError::InvalidDate => ErrorKind::InvalidDate,
            StripError::Transport(_) => ErrorKind::Transport,
            StripError::PageNotFound { .. } => ErrorKind::PageNotFound,
            StripError::ImagePathNotFound => ErrorKind::ImagePathNotFound,
            StripError::ImageNotFound { .. } => ErrorKind::ImageNotFound,
            StripError::EmptyImage => ErrorKind::EmptyImage,
            StripError::Storage { .. } => ErrorKind::Storage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_messages() {
        assert_eq!(
            StripError::ArgCount.to_string(),
            "One argument required - the date in format yyyy-mm-dd"
        );
        assert_eq!(StripError::InvalidDate.to_string(), "Invalid date provided");
        assert_eq!(
            StripError::PageNotFound { status: 302 }.to_string(),
            "404 - Page Not Found"
        );
        assert_eq!(
            StripError::ImagePathNotFound.to_string(),
            "Failed to find image path"
        );
    }

    #[test]
    fn kind_ignores_payload() {
        assert_eq!(
            StripError::PageNotFound { status: 302 }.kind(),
            StripError::PageNotFound { status: 500 }.kind()
        );
        assert_ne!(StripError::ArgCount.kind(), StripError::InvalidDate.kind());
    }

    #[test]
    fn storage_message_names_path() {
        let e = StripError::Storage {
            path: PathBuf::from("/tmp/dilbert-2021-06-15.gif"),
            error: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert_eq!(e.kind(), ErrorKind::Storage);
        assert_eq!(e.to_string(), "storage: /tmp/dilbert-2021-06-15.gif: disk full");
    }
}
