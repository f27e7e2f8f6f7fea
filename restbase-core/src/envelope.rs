use crate::http::response::{IntoResponse, Response};
use crate::http::{Json, StatusCode};
use serde::Serialize;

/// Uniform wrapper for every REST response, success and error alike.
///
/// The `status` field mirrors the HTTP status code so clients that only look
/// at the body still see the outcome. `data` is omitted from the JSON when
/// absent.
///
/// # Example
///
/// ```ignore
/// ApiResponse::new(StatusCode::OK, "note details").with_data(dto)
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            message: "OK".to_string(),
            data: None,
        }
    }
}

impl<T> ApiResponse<T> {
    /// Build an envelope with the given status and message and no payload.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            data: None,
        }
    }

    /// Attach a payload to the envelope.
    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    /// The `status` field as a `StatusCode`, falling back to 500 when the
    /// stored value is not a valid HTTP status.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(self)).into_response()
    }
}
