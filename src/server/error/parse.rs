use std::path::PathBuf;

use thiserror::Error;

/// Failures reading the transformed spreadsheet.
///
/// Per-field and per-row parse problems are not errors; they are logged and
/// the affected field or row is dropped. Only a structurally unreadable
/// workbook aborts parsing.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to open spreadsheet {path}: {source}")]
    Open {
        path: PathBuf,
        source: calamine::XlsxError,
    },
    #[error("Spreadsheet {0} has no sheets")]
    NoSheet(PathBuf),
    #[error("Failed to read first sheet of {path}: {source}")]
    Read {
        path: PathBuf,
        source: calamine::XlsxError,
    },
}
