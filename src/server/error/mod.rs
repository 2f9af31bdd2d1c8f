//! Error types for the flight log server.
//!
//! Each processing domain (upload validation, fixed-path storage, external
//! transform, spreadsheet parsing) has its own `thiserror` enum, aggregated
//! into a single [`Error`] for handlers. Validation errors map to 400
//! responses; everything else surfaces as a 500 whose plain-text body
//! carries the error detail, which is the contract callers of the original
//! service rely on.

pub mod config;
pub mod parse;
pub mod storage;
pub mod transform;
pub mod upload;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{
    config::ConfigError, parse::ParseError, storage::StorageError, transform::TransformError,
    upload::UploadError,
};

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Upload validation error (empty file, wrong extension).
    #[error(transparent)]
    UploadError(#[from] UploadError),
    /// Failed to write or delete one of the fixed parsing paths.
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// External transform script failure (spawn, timeout, exit code, output).
    #[error(transparent)]
    TransformError(#[from] TransformError),
    /// Transformed spreadsheet could not be read.
    #[error(transparent)]
    ParseError(#[from] ParseError),
    /// The store rejected the parsed batch during the upload pipeline.
    #[error("Error saving to database: {0}")]
    PersistError(sea_orm::DbErr),
    /// Database error outside the upload pipeline (query failures,
    /// connection issues).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::UploadError(err) => err.into_response(),
            Self::DbErr(err) => DatabaseError(err).into_response(),
            err => ProcessingError(err).into_response(),
        }
    }
}

/// Wrapper rendering an upload pipeline failure as a 500 with the error
/// detail in a plain-text body.
pub struct ProcessingError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for ProcessingError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error processing file: {}", self.0),
        )
            .into_response()
    }
}

/// Wrapper rendering a database failure outside the upload pipeline.
pub struct DatabaseError(pub sea_orm::DbErr);

impl IntoResponse for DatabaseError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", self.0),
        )
            .into_response()
    }
}
