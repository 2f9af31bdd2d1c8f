use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Rejections of the upload itself, before any processing starts.
///
/// The `Display` strings double as the HTTP response bodies, so they must
/// stay stable for API consumers.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UploadError {
    #[error("Please select a file to upload")]
    EmptyFile,
    #[error("Only Excel files (.xlsx) are allowed")]
    NotExcel,
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        tracing::debug!("rejected upload: {}", self);

        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
