use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{food_item::entities::FoodItem, ingestion::entities::ScanKind};

#[derive(Debug, Clone)]
pub struct ScanPhotoInput {
    pub kind: ScanKind,
    pub image_data: Vec<u8>,
}

/// Outcome of a scan. Partial success is normal: `rejected` counts objects
/// the model produced that failed strict validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScanSummary {
    pub items: Vec<FoodItem>,
    pub added: usize,
    pub rejected: usize,
}
