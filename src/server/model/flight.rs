use chrono::{NaiveDate, NaiveTime};

/// One flight entry mapped from a spreadsheet row, before persistence.
///
/// Every field is optional: the row mapper parses each cell independently
/// and a failed parse leaves that field absent rather than dropping the row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlightRecord {
    pub registration_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub time_start: Option<NaiveTime>,
    pub time_end: Option<NaiveTime>,
    pub region: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub flight_type: Option<String>,
    pub purpose: Option<String>,
    pub main_reg_number: Option<String>,
}
