use axum::extract::{Multipart, State};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        ingestion::handlers::read_image_field,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};
use virtualfridge_core::domain::ingestion::{
    entities::ScanKind,
    ports::IngestionService,
    value_objects::{ScanPhotoInput, ScanSummary},
};

#[utoipa::path(
    post,
    path = "/receipt",
    tag = "scan",
    summary = "Scan a grocery receipt",
    description = "Extracts edible items from a receipt photo and adds them to the inventory",
    responses(
        (status = 200, body = ScanSummary),
        (status = 400, description = "Bad request"),
        (status = 502, description = "LLM call failed")
    )
)]
pub async fn scan_receipt(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    multipart: Multipart,
) -> Result<Response<ScanSummary>, ApiError> {
    let image_data = read_image_field(multipart).await?;

    let summary = state
        .service
        .scan_photo(
            identity,
            ScanPhotoInput {
                kind: ScanKind::Receipt,
                image_data,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(summary))
}
