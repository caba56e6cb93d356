use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use virtualfridge_core::domain::health::{
    entities::DatabaseHealthStatus, ports::HealthCheckService,
};

#[utoipa::path(
    get,
    path = "/readness",
    tag = "health",
    summary = "Readiness check",
    responses(
        (status = 200, body = DatabaseHealthStatus)
    )
)]
pub async fn get_readness(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readness().await.map_err(ApiError::from)?;

    Ok(Response::OK(status))
}
