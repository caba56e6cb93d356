use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::food_item::entities::{Category, FoodItem, Unit};

#[derive(Debug, Clone)]
pub struct CreateFoodItemInput {
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub category: Category,
    pub expiration: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UpdateFoodItemInput {
    pub item_id: Uuid,
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub category: Category,
    pub expiration: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct GetFoodItemsInput {
    pub category: Option<Category>,
    pub search: Option<String>,
}

/// Repository-level filter derived from [`GetFoodItemsInput`].
#[derive(Debug, Clone, Default)]
pub struct GetFoodItemsFilter {
    pub category: Option<Category>,
    pub name_contains: Option<String>,
}

/// The user's inventory plus the expiration counters shown in the fridge header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodItemList {
    pub items: Vec<FoodItem>,
    pub total: usize,
    pub expiring_soon: usize,
    pub expired: usize,
}
