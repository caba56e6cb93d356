use super::handlers::{
    get_recipe_suggestions::{__path_get_recipe_suggestions, get_recipe_suggestions},
    get_recipe_video::{__path_get_recipe_video, get_recipe_video},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_recipe_suggestions, get_recipe_video))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes/suggestions", state.args.server.root_path),
            get(get_recipe_suggestions),
        )
        .route(
            &format!("{}/recipes/video", state.args.server.root_path),
            get(get_recipe_video),
        )
        .layer(middleware::from_fn(auth))
}
