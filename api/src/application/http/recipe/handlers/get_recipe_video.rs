use axum::extract::{Query, State};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::validators::GetRecipeVideoParams,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};
use virtualfridge_core::domain::media::{entities::RecipeVideo, ports::MediaService};

#[utoipa::path(
    get,
    path = "/video",
    tag = "recipes",
    summary = "Find a tutorial video",
    description = "Top video search result for a recipe; 404 when nothing is found",
    params(GetRecipeVideoParams),
    responses(
        (status = 200, body = RecipeVideo),
        (status = 404, description = "No tutorial found")
    )
)]
pub async fn get_recipe_video(
    State(state): State<AppState>,
    RequiredIdentity(_identity): RequiredIdentity,
    Query(params): Query<GetRecipeVideoParams>,
) -> Result<Response<RecipeVideo>, ApiError> {
    let video = state
        .service
        .find_tutorial_video(format!("{} recipe", params.recipe))
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| {
            ApiError::NotFound(format!("No tutorial video found for {}", params.recipe))
        })?;

    Ok(Response::OK(video))
}
