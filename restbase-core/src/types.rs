//! Convenience type aliases for common handler return types.

use crate::envelope::ApiResponse;
use crate::error::HttpError;

/// Flexible result alias — any response type with [`HttpError`].
pub type ApiResult<T> = Result<T, HttpError>;

/// The return shape of enveloped handlers —
/// `Result<ApiResponse<T>, HttpError>`.
pub type EnvelopeResult<T> = Result<ApiResponse<T>, HttpError>;
