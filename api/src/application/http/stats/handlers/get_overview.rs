use axum::extract::State;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use virtualfridge_core::domain::stats::{ports::StatsService, value_objects::InventoryOverview};

#[utoipa::path(
    get,
    path = "/overview",
    tag = "stats",
    summary = "Inventory overview",
    description = "Category breakdown, expiration metrics and the fridge diversity score, recomputed from the current inventory",
    responses(
        (status = 200, body = InventoryOverview)
    )
)]
pub async fn get_overview(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<InventoryOverview>, ApiError> {
    let overview = state
        .service
        .get_overview(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(overview))
}
