use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;
use virtualfridge_core::domain::food_item::entities::{Category, Unit};

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateFoodItemRequest {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "quantity must not be negative"))]
    pub quantity: f64,
    pub unit: Unit,
    pub category: Category,
    pub expiration: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateFoodItemRequest {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "quantity must not be negative"))]
    pub quantity: f64,
    pub unit: Unit,
    pub category: Category,
    pub expiration: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetFoodItemsParams {
    /// Restrict to one category, e.g. "Dairy".
    pub category: Option<String>,
    /// Case-insensitive name substring.
    pub search: Option<String>,
}
