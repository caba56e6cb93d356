use super::handlers::{
    get_health::{__path_get_health, get_health},
    get_readness::{__path_get_readness, get_readness},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_health, get_readness))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health", root_path), get(get_health))
        .route(
            &format!("{}/health/readness", root_path),
            get(get_readness),
        )
}
