use std::path::Path;

use calamine::{open_workbook, Reader, Xlsx};

use crate::server::{
    error::parse::ParseError,
    model::flight::FlightRecord,
    parser::row::{is_blank_row, map_row},
};

/// Parses the first sheet of the workbook at `path` into flight records.
///
/// Row 0 is the header and is skipped; blank rows are skipped; every other
/// row is mapped tolerantly. The returned list may be empty. Only an
/// unreadable workbook is an error.
pub fn parse_workbook(path: &Path) -> Result<Vec<FlightRecord>, ParseError> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ParseError::NoSheet(path.to_path_buf()))?
        .map_err(|source| ParseError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let mut records = Vec::new();

    for row in range.rows().skip(1) {
        if is_blank_row(row) {
            continue;
        }

        records.push(map_row(row));
    }

    tracing::debug!("parsed {} records from {}", records.len(), path.display());

    Ok(records)
}
