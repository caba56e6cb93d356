use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use virtualfridge_core::domain::health::ports::HealthCheckService;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub latency_ms: u64,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Liveness check",
    responses(
        (status = 200, body = HealthResponse)
    )
)]
pub async fn get_health(
    State(state): State<AppState>,
) -> Result<Response<HealthResponse>, ApiError> {
    let latency_ms = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(HealthResponse { latency_ms }))
}
