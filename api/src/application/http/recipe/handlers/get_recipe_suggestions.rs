use axum::extract::{Query, State};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::validators::GetRecipeSuggestionsParams,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};
use virtualfridge_core::domain::recipe::{
    ports::RecipeService,
    value_objects::{RecipePage, RecipeSort, RecipeSuggestionsInput},
};

#[utoipa::path(
    get,
    path = "/suggestions",
    tag = "recipes",
    summary = "Suggest recipes",
    description = "Relevance-ordered, paged recipe suggestions matched against the caller's inventory",
    params(GetRecipeSuggestionsParams),
    responses(
        (status = 200, body = RecipePage)
    )
)]
pub async fn get_recipe_suggestions(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(params): Query<GetRecipeSuggestionsParams>,
) -> Result<Response<RecipePage>, ApiError> {
    let sort = match params.sort.as_deref() {
        None => RecipeSort::default(),
        Some(raw) => raw
            .parse::<RecipeSort>()
            .map_err(|_| ApiError::BadRequest(format!("Unknown sort mode: {}", raw)))?,
    };

    let page = state
        .service
        .suggest_recipes(
            identity,
            RecipeSuggestionsInput {
                query: params.query.unwrap_or_default(),
                sort,
                page: params.page.unwrap_or(0),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(page))
}
