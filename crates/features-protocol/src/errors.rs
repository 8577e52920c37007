//! Feature API error types.

use thiserror::Error;

use crate::responses::ExceptionResponse;

/// Result type alias using FeatureError.
pub type FeatureResult<T> = Result<T, FeatureError>;

/// Errors that can occur while serving feature collections.
#[derive(Debug, Error)]
pub enum FeatureError {
    /// Collection id is not registered.
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    /// No row matched the requested feature id.
    #[error("Feature not found: {0}")]
    FeatureNotFound(String),

    /// SQL execution or row decoding failed.
    #[error("Query failed: {0}")]
    QueryFailure(String),

    /// The database returned geometry text that could not be parsed.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
}

impl FeatureError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            FeatureError::CollectionNotFound(_) => 404,
            FeatureError::FeatureNotFound(_) => 404,
            FeatureError::QueryFailure(_) => 500,
            FeatureError::InvalidGeometry(_) => 500,
        }
    }

    /// Whether this error is a server fault whose detail must not reach the client.
    pub fn is_internal(&self) -> bool {
        self.status_code() >= 500
    }

    /// Convert to an ExceptionResponse.
    ///
    /// Server faults carry a generic detail; the underlying message is for logs only.
    pub fn to_exception(&self) -> ExceptionResponse {
        match self {
            FeatureError::CollectionNotFound(_) | FeatureError::FeatureNotFound(_) => {
                ExceptionResponse::not_found(self.to_string())
            }
            FeatureError::QueryFailure(_) | FeatureError::InvalidGeometry(_) => {
                ExceptionResponse::internal_error("The server failed to process the request")
            }
        }
    }
}
