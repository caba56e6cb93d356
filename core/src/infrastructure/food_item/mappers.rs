use crate::{domain::food_item::entities::FoodItem, entity::food_items};

impl From<&food_items::Model> for FoodItem {
    fn from(model: &food_items::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name.clone(),
            quantity: model.quantity,
            unit: model.unit.as_str().into(),
            category: model.category.as_str().into(),
            expiration: model.expiration.to_utc(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<food_items::Model> for FoodItem {
    fn from(model: food_items::Model) -> Self {
        Self::from(&model)
    }
}
