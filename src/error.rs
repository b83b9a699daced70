//! Shared error type across the service.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Unified error type used by config loading and startup wiring.
///
/// Request handlers never produce these: the endpoints take no input and
/// cannot fail, so unknown routes fall through to the framework's default
/// 404 response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}
