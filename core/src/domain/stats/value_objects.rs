use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food_item::entities::Category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryStat {
    pub category: Category,
    pub count: usize,
    pub percentage: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DiversityLabel {
    Excellent,
    Good,
    Fair,
    Low,
}

impl DiversityLabel {
    pub fn for_score(score: f64) -> Self {
        if score >= 0.8 {
            DiversityLabel::Excellent
        } else if score >= 0.5 {
            DiversityLabel::Good
        } else if score >= 0.3 {
            DiversityLabel::Fair
        } else {
            DiversityLabel::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InventoryOverview {
    pub total_items: usize,
    pub expired_items: usize,
    pub average_days_to_expiration: f64,
    pub most_common_category: Option<Category>,
    pub categories: Vec<CategoryStat>,
    pub diversity_score: f64,
    pub diversity_label: DiversityLabel,
    pub suggestion: String,
}
