use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::{Error, warning};

impl Error {
    /// Status code and caller-facing message. Upstream bodies and other
    /// internals stay in the server log.
    pub fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            Error::Configuration(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server is not configured correctly".to_string(),
            ),
            Error::UpstreamAuth { .. } => (
                StatusCode::BAD_REQUEST,
                "Failed to get Spotify access token".to_string(),
            ),
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Error::MissingParameter(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::InvalidBody(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Invalid request body".to_string(),
            ),
            Error::TransferFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to transfer playlist".to_string(),
            ),
            Error::Upstream { .. } | Error::Http(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Upstream service request failed".to_string(),
            ),
            Error::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        warning!("Request failed with {}: {}", status.as_u16(), self);

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
