use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        food_item::validators::UpdateFoodItemRequest,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};
use virtualfridge_core::domain::food_item::{
    entities::FoodItem, ports::FoodItemService, value_objects::UpdateFoodItemInput,
};

#[utoipa::path(
    put,
    path = "/{item_id}",
    tag = "food-items",
    summary = "Update a food item",
    params(
        ("item_id" = Uuid, Path, description = "Item id"),
    ),
    request_body = UpdateFoodItemRequest,
    responses(
        (status = 200, body = FoodItem),
        (status = 403, description = "Item belongs to another user"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn update_food_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(request): Json<UpdateFoodItemRequest>,
) -> Result<Response<FoodItem>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let item = state
        .service
        .update_item(
            identity,
            UpdateFoodItemInput {
                item_id,
                name: request.name,
                quantity: request.quantity,
                unit: request.unit,
                category: request.category,
                expiration: request.expiration,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(item))
}
