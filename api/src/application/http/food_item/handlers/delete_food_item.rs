use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use virtualfridge_core::domain::food_item::ports::FoodItemService;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteFoodItemResponse {
    pub deleted: bool,
}

#[utoipa::path(
    delete,
    path = "/{item_id}",
    tag = "food-items",
    summary = "Delete a food item",
    params(
        ("item_id" = Uuid, Path, description = "Item id"),
    ),
    responses(
        (status = 200, body = DeleteFoodItemResponse),
        (status = 403, description = "Item belongs to another user"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn delete_food_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DeleteFoodItemResponse>, ApiError> {
    state
        .service
        .delete_item(identity, item_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteFoodItemResponse { deleted: true }))
}
