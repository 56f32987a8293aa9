//! Custom error types for the snapshot store
//!
//! Every failure is classified as a client input error, a missing snapshot,
//! or an unexpected internal fault so the transport layer can map it to a
//! status code without inspecting messages.

use axum::http::StatusCode;
use std::fmt;

use crate::constants::response::GENERIC_ERROR_MESSAGE;

pub type StoreResult<T> = Result<T, StoreError>;

/// Main error type for the snapshot store
#[derive(Debug)]
pub enum StoreError {
    /// Caller-correctable input errors
    BadRequest(BadRequestError),

    /// Well-formed request for a snapshot that does not exist
    NotFound(NotFoundError),

    /// I/O, parse, or other internal failures
    Unexpected(UnexpectedError),
}

/// Input validation error variants
#[derive(Debug)]
pub enum BadRequestError {
    /// `before` cursor is not a non-negative integer
    InvalidBefore { value: String },

    /// `limit` is not a non-negative integer
    InvalidLimit { value: String },

    /// Snapshot id is neither an integer nor `latest`
    InvalidSnapshotId { value: String },
}

/// Missing snapshot variants
#[derive(Debug)]
pub enum NotFoundError {
    /// No file exists for the requested id
    SnapshotNotFound { snapshot_id: String },

    /// `latest` was requested but the export directory holds no snapshots
    NoSnapshots,
}

/// Internal failure variants
#[derive(Debug)]
pub enum UnexpectedError {
    /// Export directory could not be listed
    DirectoryRead { path: String, reason: String },

    /// Snapshot file could not be read
    FileRead { path: String, reason: String },

    /// Snapshot file is not a well-formed record list
    Parse { path: String, reason: String },
}

/// Classification used for transport status mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    Unexpected,
}

impl ErrorKind {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::BadRequest(_) => ErrorKind::BadRequest,
            StoreError::NotFound(_) => ErrorKind::NotFound,
            StoreError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    #[inline]
    pub fn status_code(&self) -> StatusCode {
        self.kind().status_code()
    }

    /// Message safe to return to a client.
    ///
    /// Unexpected errors collapse to a generic message; the detailed
    /// `Display` output is meant for server-side logs only.
    pub fn public_message(&self) -> String {
        match self {
            StoreError::BadRequest(e) => e.to_string(),
            StoreError::NotFound(e) => e.to_string(),
            StoreError::Unexpected(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn directory_read(path: impl fmt::Display, err: impl fmt::Display) -> Self {
        StoreError::Unexpected(UnexpectedError::DirectoryRead {
            path: path.to_string(),
            reason: err.to_string(),
        })
    }

    pub fn file_read(path: impl fmt::Display, err: impl fmt::Display) -> Self {
        StoreError::Unexpected(UnexpectedError::FileRead {
            path: path.to_string(),
            reason: err.to_string(),
        })
    }

    pub fn parse(path: impl fmt::Display, err: impl fmt::Display) -> Self {
        StoreError::Unexpected(UnexpectedError::Parse {
            path: path.to_string(),
            reason: err.to_string(),
        })
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::BadRequest(e) => write!(f, "Bad request: {}", e),
            StoreError::NotFound(e) => write!(f, "Not found: {}", e),
            StoreError::Unexpected(e) => write!(f, "Unexpected error: {}", e),
        }
    }
}

impl fmt::Display for BadRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BadRequestError::InvalidBefore { .. } => {
                write!(f, "Invalid `before`, provide a snapshot id.")
            }
            BadRequestError::InvalidLimit { .. } => write!(f, "Invalid `limit`"),
            BadRequestError::InvalidSnapshotId { .. } => write!(f, "Invalid snapshot id."),
        }
    }
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundError::SnapshotNotFound { .. } | NotFoundError::NoSnapshots => {
                write!(f, "Snapshot not found.")
            }
        }
    }
}

impl fmt::Display for UnexpectedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnexpectedError::DirectoryRead { path, reason } => {
                write!(f, "Failed to read export directory '{}': {}", path, reason)
            }
            UnexpectedError::FileRead { path, reason } => {
                write!(f, "Failed to read snapshot '{}': {}", path, reason)
            }
            UnexpectedError::Parse { path, reason } => {
                write!(f, "Failed to parse snapshot '{}': {}", path, reason)
            }
        }
    }
}

// Implement std::error::Error
impl std::error::Error for StoreError {}
impl std::error::Error for BadRequestError {}
impl std::error::Error for NotFoundError {}
impl std::error::Error for UnexpectedError {}

// Conversion helpers for sub-errors
impl From<BadRequestError> for StoreError {
    fn from(err: BadRequestError) -> Self {
        StoreError::BadRequest(err)
    }
}

impl From<NotFoundError> for StoreError {
    fn from(err: NotFoundError) -> Self {
        StoreError::NotFound(err)
    }
}
