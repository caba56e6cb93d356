use super::handlers::get_overview::{__path_get_overview, get_overview};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_overview))]
pub struct StatsApiDoc;

pub fn stats_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/stats/overview", state.args.server.root_path),
            get(get_overview),
        )
        .layer(middleware::from_fn(auth))
}
