//! Spreadsheet parsing: cell extraction, row mapping, and the sheet walker.
//!
//! Parsing is deliberately tolerant. A cell that fails to parse leaves its
//! field absent and logs a warning; only a structurally unreadable workbook
//! is an error.

pub mod cell;
pub mod row;
pub mod sheet;
