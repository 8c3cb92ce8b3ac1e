//! Application-level error taxonomy.
//!
//! Repositories return [`AppError`]. Controllers never show its details;
//! they publish [`AppError::user_message`], one fixed string per kind.

use thiserror::Error;

use crate::ports::NetworkError;

/// Errors surfaced by repositories.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Decoding failed: {0}")]
    DecodingFailed(String),

    #[error("HTTP error {status}: {message}")]
    HttpError { status: u16, message: String },

    #[error("Network fault: {0}")]
    NetworkFault(String),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("{0}")]
    Unknown(String),
}

/// Discriminant of [`AppError`], for matching without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppErrorKind {
    InvalidUrl,
    EncodingFailed,
    DecodingFailed,
    HttpError,
    NetworkFault,
    Cancelled,
    Unknown,
}

impl AppErrorKind {
    /// Stable, user-facing message for this kind.
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::InvalidUrl => "The request could not be prepared.",
            Self::EncodingFailed => "Failed to prepare the data to send.",
            Self::DecodingFailed => "Received unexpected data format.",
            Self::HttpError => "Server encountered an issue. Please try again.",
            Self::NetworkFault => "Network connection seems unstable.",
            Self::Cancelled => "Request was cancelled.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl AppError {
    pub const fn kind(&self) -> AppErrorKind {
        match self {
            Self::InvalidUrl(_) => AppErrorKind::InvalidUrl,
            Self::EncodingFailed(_) => AppErrorKind::EncodingFailed,
            Self::DecodingFailed(_) => AppErrorKind::DecodingFailed,
            Self::HttpError { .. } => AppErrorKind::HttpError,
            Self::NetworkFault(_) => AppErrorKind::NetworkFault,
            Self::Cancelled => AppErrorKind::Cancelled,
            Self::Unknown(_) => AppErrorKind::Unknown,
        }
    }

    pub const fn user_message(&self) -> &'static str {
        self.kind().user_message()
    }
}

impl From<NetworkError> for AppError {
    fn from(err: NetworkError) -> Self {
        match err {
            NetworkError::InvalidUrl(url) => Self::InvalidUrl(url),
            NetworkError::EncodingFailed(reason) => Self::EncodingFailed(reason),
            NetworkError::DecodingFailed(reason) => Self::DecodingFailed(reason),
            NetworkError::HttpError { status, message } => Self::HttpError { status, message },
            NetworkError::NetworkFault(cause) => Self::NetworkFault(cause.to_string()),
        }
    }
}

/// Result type alias for repository operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_errors_map_one_to_one() {
        let cases = [
            (
                NetworkError::InvalidUrl("::".to_string()),
                AppErrorKind::InvalidUrl,
            ),
            (
                NetworkError::EncodingFailed("x".to_string()),
                AppErrorKind::EncodingFailed,
            ),
            (
                NetworkError::DecodingFailed("x".to_string()),
                AppErrorKind::DecodingFailed,
            ),
            (
                NetworkError::HttpError {
                    status: 500,
                    message: "Internal Server Error".to_string(),
                },
                AppErrorKind::HttpError,
            ),
            (
                NetworkError::NetworkFault("timed out".into()),
                AppErrorKind::NetworkFault,
            ),
        ];

        for (network, expected) in cases {
            assert_eq!(AppError::from(network).kind(), expected);
        }
    }

    #[test]
    fn test_http_error_keeps_status() {
        let err = AppError::from(NetworkError::HttpError {
            status: 404,
            message: "Not Found".to_string(),
        });
        assert!(matches!(err, AppError::HttpError { status: 404, .. }));
    }

    #[test]
    fn test_user_message_hides_internals() {
        let err = AppError::Unknown("pointer 0xdeadbeef went away".to_string());
        assert_eq!(err.user_message(), "Something went wrong. Please try again.");

        let err = AppError::NetworkFault("tls handshake eof".to_string());
        assert!(!err.user_message().contains("tls"));
    }

    #[test]
    fn test_user_messages_are_distinct() {
        use std::collections::HashSet;

        let kinds = [
            AppErrorKind::InvalidUrl,
            AppErrorKind::EncodingFailed,
            AppErrorKind::DecodingFailed,
            AppErrorKind::HttpError,
            AppErrorKind::NetworkFault,
            AppErrorKind::Cancelled,
            AppErrorKind::Unknown,
        ];
        let messages: HashSet<_> = kinds.iter().map(|k| k.user_message()).collect();
        assert_eq!(messages.len(), kinds.len());
    }
}
