use axum::{Json, extract::State};
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        food_item::validators::CreateFoodItemRequest,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};
use virtualfridge_core::domain::food_item::{
    entities::FoodItem, ports::FoodItemService, value_objects::CreateFoodItemInput,
};

#[utoipa::path(
    post,
    path = "",
    tag = "food-items",
    summary = "Add a food item",
    description = "Manual entry: creates one inventory item for the caller",
    request_body = CreateFoodItemRequest,
    responses(
        (status = 201, body = FoodItem, description = "Item created"),
        (status = 400, description = "Bad request")
    )
)]
pub async fn create_food_item(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(request): Json<CreateFoodItemRequest>,
) -> Result<Response<FoodItem>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let item = state
        .service
        .create_item(
            identity,
            CreateFoodItemInput {
                name: request.name,
                quantity: request.quantity,
                unit: request.unit,
                category: request.category,
                expiration: request.expiration,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(item))
}
