use crate::envelope::ApiResponse;
use crate::http::response::{IntoResponse, Response};
use crate::http::StatusCode;

/// Infrastructure-level error surfaced straight as an HTTP response.
///
/// Domain outcomes (not-found, deleted-state conflicts) travel inside
/// [`ApiResponse`] with the matching `status`; `HttpError` covers the faults
/// around them — a missing request body, a failing persistence backend.
/// Rendered as a data-less envelope so the wire shape stays uniform.
pub enum HttpError {
    NotFound(String),
    Unauthorized(String),
    BadRequest(String),
    Internal(String),
}

impl HttpError {
    /// The 400 envelope for endpoints that required a body and got none.
    pub fn missing_body() -> Self {
        HttpError::BadRequest("the request body is missing".to_string())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        ApiResponse::<()>::new(status, message).into_response()
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            HttpError::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            HttpError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            HttpError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl std::fmt::Debug for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Display>::fmt(self, f)
    }
}

impl From<std::io::Error> for HttpError {
    fn from(err: std::io::Error) -> Self {
        HttpError::Internal(err.to_string())
    }
}

/// Generate `From<E> for HttpError` implementations that map error types to
/// a specific `HttpError` variant.
///
/// # Example
///
/// ```ignore
/// restbase_core::map_error! {
///     AddrParseError => BadRequest,
///     std::io::Error => Internal,
/// }
/// ```
#[macro_export]
macro_rules! map_error {
    ( $( $err_ty:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$err_ty> for $crate::HttpError {
                fn from(err: $err_ty) -> Self {
                    $crate::HttpError::$variant(err.to_string())
                }
            }
        )*
    };
}
