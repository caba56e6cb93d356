use super::handlers::{
    scan_fridge::{__path_scan_fridge, scan_fridge},
    scan_receipt::{__path_scan_receipt, scan_receipt},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(scan_receipt, scan_fridge))]
pub struct IngestionApiDoc;

pub fn ingestion_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/scan/receipt", state.args.server.root_path),
            post(scan_receipt),
        )
        .route(
            &format!("{}/scan/fridge", state.args.server.root_path),
            post(scan_fridge),
        )
        .layer(middleware::from_fn(auth))
}
