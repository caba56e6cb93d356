use sea_orm::{
    ActiveValue::Set,
    ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder,
    prelude::Expr,
    sea_query::{IntoCondition, extension::postgres::PgExpr},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        food_item::{
            entities::FoodItem, ports::FoodItemRepository, value_objects::GetFoodItemsFilter,
        },
    },
    entity::food_items::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresFoodItemRepository {
    pub db: DatabaseConnection,
}

impl PostgresFoodItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn active_model(item: &FoodItem) -> ActiveModel {
        ActiveModel {
            id: Set(item.id),
            user_id: Set(item.user_id),
            name: Set(item.name.clone()),
            quantity: Set(item.quantity),
            unit: Set(item.unit.as_str().to_string()),
            category: Set(item.category.as_str().to_string()),
            expiration: Set(item.expiration.fixed_offset()),
            created_at: Set(item.created_at.fixed_offset()),
            updated_at: Set(item.updated_at.fixed_offset()),
        }
    }
}

impl FoodItemRepository for PostgresFoodItemRepository {
    async fn create(&self, item: FoodItem) -> Result<FoodItem, CoreError> {
        let created = Entity::insert(Self::active_model(&item))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create food item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(FoodItem::from(created))
    }

    async fn get_by_id(&self, item_id: Uuid) -> Result<Option<FoodItem>, CoreError> {
        let item = Entity::find_by_id(item_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get food item: {}", e);
                CoreError::InternalServerError
            })?
            .map(FoodItem::from);

        Ok(item)
    }

    async fn get_by_user(
        &self,
        user_id: Uuid,
        filter: GetFoodItemsFilter,
    ) -> Result<Vec<FoodItem>, CoreError> {
        let mut query = Entity::find().filter(Column::UserId.eq(user_id));

        if let Some(category) = filter.category {
            query = query.filter(Column::Category.eq(category.as_str()));
        }

        if let Some(ref search) = filter.name_contains {
            query = query.filter(
                Expr::col(Column::Name)
                    .ilike(format!("%{}%", search))
                    .into_condition(),
            );
        }

        let items = query
            .order_by(Column::Expiration, Order::Asc)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get food items: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(FoodItem::from)
            .collect();

        Ok(items)
    }

    async fn update(&self, item: FoodItem) -> Result<FoodItem, CoreError> {
        let updated = Entity::update(Self::active_model(&item))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update food item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(FoodItem::from(updated))
    }

    async fn delete(&self, item_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_by_id(item_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete food item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<u64, CoreError> {
        let result = Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete food items for user: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }
}
