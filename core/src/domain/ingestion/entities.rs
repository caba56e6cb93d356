use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food_item::entities::{Category, Unit};

/// What kind of photo is being scanned. Both kinds share one pipeline and
/// differ only in prompt wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScanKind {
    Receipt,
    Fridge,
}

/// One item as the model reports it. Deserialization is the strict per-item
/// validator: an object with a missing field, a non-integer quantity or a
/// value outside the unit/category vocabulary fails to decode and the item
/// is rejected rather than silently altered.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParsedItem {
    pub name: String,
    pub quantity: i64,
    pub unit: Unit,
    pub category: Category,
    pub expiration_days: i64,
}
