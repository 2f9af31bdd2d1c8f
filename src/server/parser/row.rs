use calamine::Data;

use crate::server::{
    model::flight::FlightRecord,
    parser::cell::{cell_text, non_empty, parse_coord, parse_date, parse_int, parse_time},
};

/// A row is blank when every cell across its defined range is empty.
/// Blank rows are skipped entirely rather than mapped.
pub fn is_blank_row(row: &[Data]) -> bool {
    row.iter().all(|data| matches!(data, Data::Empty))
}

/// Maps one spreadsheet row into a [`FlightRecord`].
///
/// Fixed column order: registrationId, date, timeStart, timeEnd, region,
/// lat, lon, flightType, purpose, mainRegNumber. Each field is extracted
/// independently; a failed parse leaves that field absent without affecting
/// its neighbors.
pub fn map_row(row: &[Data]) -> FlightRecord {
    let text = |column: usize| row.get(column).map(cell_text).unwrap_or_default();

    let main_reg_number = non_empty(&text(9));
    if main_reg_number.is_none() {
        // Expected to be missing often enough that it is only worth a warning.
        tracing::warn!("mainRegNumber is empty");
    }

    FlightRecord {
        registration_id: parse_int("registrationId", &text(0)),
        date: parse_date("date", &text(1)),
        time_start: parse_time("timeStart", &text(2)),
        time_end: parse_time("timeEnd", &text(3)),
        region: non_empty(&text(4)),
        lat: parse_coord("lat", &text(5)),
        lon: parse_coord("lon", &text(6)),
        flight_type: non_empty(&text(7)),
        purpose: non_empty(&text(8)),
        main_reg_number,
    }
}
