use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::flight::{FlightDto, UploadResponseDto},
    server::{
        data::flight::FlightRepository,
        error::{upload::UploadError, Error},
        model::app::AppState,
        service::processing::ProcessingService,
    },
};

pub static FLIGHT_TAG: &str = "flights";

/// Upload a flight log spreadsheet, transform it, and persist the records
#[utoipa::path(
    post,
    path = "/upload-and-parse",
    tag = FLIGHT_TAG,
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File processed successfully", body = UploadResponseDto),
        (status = 400, description = "Missing file or not an .xlsx upload", body = String),
        (status = 500, description = "Processing failed", body = String)
    ),
)]
pub async fn upload_and_parse(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let mut file_name = None;
    let mut bytes = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| UploadError::EmptyFile)?
    {
        if field.name() == Some("file") {
            file_name = field.file_name().map(str::to_string);
            bytes = Some(
                field
                    .bytes()
                    .await
                    .map_err(|_| UploadError::EmptyFile)?,
            );
        }
    }

    // Validation runs before anything touches the filesystem or the store.
    let bytes = match bytes {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => return Err(UploadError::EmptyFile.into()),
    };
    let file_name = file_name.unwrap_or_default();
    if !file_name.ends_with(".xlsx") {
        return Err(UploadError::NotExcel.into());
    }

    // One upload at a time; the parsing directory is a single-slot resource.
    let _guard = state.parse_lock.lock().await;

    let service = ProcessingService::new(&state.db, &state.config);
    let result = service.parse_and_save(&file_name, &bytes).await?;

    Ok((
        StatusCode::OK,
        Json(UploadResponseDto {
            message: "File processed successfully".to_string(),
            original_file_name: result.original_filename,
            records_processed: result.records_persisted,
        }),
    )
        .into_response())
}

/// Get every persisted flight record
#[utoipa::path(
    get,
    path = "/all",
    tag = FLIGHT_TAG,
    responses(
        (status = 200, description = "All persisted flight records", body = Vec<FlightDto>),
        (status = 500, description = "Database error", body = String)
    ),
)]
pub async fn get_all_flights(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let repository = FlightRepository::new(&state.db);

    let flights = repository.find_all().await?;

    let flight_dtos: Vec<FlightDto> = flights.into_iter().map(FlightDto::from).collect();

    Ok((StatusCode::OK, Json(flight_dtos)).into_response())
}
