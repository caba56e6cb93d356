use axum::extract::{Query, State};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        food_item::validators::GetFoodItemsParams,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};
use virtualfridge_core::domain::food_item::{
    entities::Category,
    ports::FoodItemService,
    value_objects::{FoodItemList, GetFoodItemsInput},
};

#[utoipa::path(
    get,
    path = "",
    tag = "food-items",
    summary = "List food items",
    description = "The caller's inventory, sorted by days until expiration, with expiring/expired counters",
    params(GetFoodItemsParams),
    responses(
        (status = 200, body = FoodItemList)
    )
)]
pub async fn get_food_items(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(params): Query<GetFoodItemsParams>,
) -> Result<Response<FoodItemList>, ApiError> {
    let category = match params.category.as_deref() {
        None | Some("All") => None,
        Some(raw) => Some(raw.parse::<Category>().map_err(|_| {
            ApiError::BadRequest(format!("Unknown category: {}", raw))
        })?),
    };

    let list = state
        .service
        .list_items(
            identity,
            GetFoodItemsInput {
                category,
                search: params.search,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(list))
}
