use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One persisted flight record as returned by `GET /all`.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlightDto {
    pub id: i64,
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

impl From<entity::flight::Model> for FlightDto {
    fn from(model: entity::flight::Model) -> Self {
        Self {
            id: model.flight_id,
            registration_id: model.registration_id,
            date: model.date,
            time_start: model.time_start,
            time_end: model.time_end,
            region: model.region,
            lat: model.lat,
            lon: model.lon,
            flight_type: model.flight_type,
            purpose: model.purpose,
            main_reg_number: model.main_reg_number,
        }
    }
}

/// The response when an uploaded spreadsheet was processed successfully.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponseDto {
    /// Human readable status message
    pub message: String,
    /// Name of the uploaded file as sent by the client
    pub original_file_name: String,
    /// Number of records persisted from the transformed spreadsheet
    pub records_processed: usize,
}
