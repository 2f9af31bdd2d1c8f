use calamine::Data;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Renders a cell as text the way the downstream field parsers expect it.
///
/// Numeric cells holding an integral value render without a fractional
/// suffix (a stored `5.0` reads as `"5"`), non-integral numerics keep their
/// full decimal value, and date-formatted numerics render as an ISO local
/// date-time. Anything unreadable renders as the empty string.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(text) => text.trim().to_string(),
        Data::Float(value) => {
            if value.fract() == 0.0 {
                format!("{}", *value as i64)
            } else {
                value.to_string()
            }
        }
        Data::Int(value) => value.to_string(),
        Data::DateTime(excel_dt) => match excel_dt.as_datetime() {
            Some(dt) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
            None => String::new(),
        },
        Data::DateTimeIso(text) => text.trim().to_string(),
        _ => String::new(),
    }
}

/// Parses an integer field, absent on empty or non-integer text.
pub fn parse_int(field: &str, raw: &str) -> Option<i64> {
    if raw.is_empty() {
        return None;
    }

    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("failed to parse {}: {:?}", field, raw);
            None
        }
    }
}

/// Parses a local date-time and keeps the date component.
///
/// A space between date and time is normalized to the ISO `T` connector
/// before parsing.
pub fn parse_date(field: &str, raw: &str) -> Option<NaiveDate> {
    if raw.is_empty() {
        return None;
    }

    match raw.replace(' ', "T").parse::<NaiveDateTime>() {
        Ok(date_time) => Some(date_time.date()),
        Err(_) => {
            tracing::warn!("failed to parse {}: {:?}", field, raw);
            None
        }
    }
}

/// Parses an `HH:mm:ss` time of day.
pub fn parse_time(field: &str, raw: &str) -> Option<NaiveTime> {
    if raw.is_empty() {
        return None;
    }

    match NaiveTime::parse_from_str(raw, "%H:%M:%S") {
        Ok(time) => Some(time),
        Err(_) => {
            tracing::warn!("failed to parse {}: {:?}", field, raw);
            None
        }
    }
}

/// Parses a floating point coordinate.
pub fn parse_coord(field: &str, raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }

    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("failed to parse {}: {:?}", field, raw);
            None
        }
    }
}

/// Keeps non-empty text verbatim.
pub fn non_empty(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}
