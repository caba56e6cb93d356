use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_item::{
        entities::FoodItem,
        value_objects::{
            CreateFoodItemInput, FoodItemList, GetFoodItemsFilter, GetFoodItemsInput,
            UpdateFoodItemInput,
        },
    },
    identity::value_objects::Identity,
};

/// Repository trait for the per-user food item collection
#[cfg_attr(test, mockall::automock)]
pub trait FoodItemRepository: Send + Sync {
    fn create(&self, item: FoodItem) -> impl Future<Output = Result<FoodItem, CoreError>> + Send;

    fn get_by_id(
        &self,
        item_id: Uuid,
    ) -> impl Future<Output = Result<Option<FoodItem>, CoreError>> + Send;

    fn get_by_user(
        &self,
        user_id: Uuid,
        filter: GetFoodItemsFilter,
    ) -> impl Future<Output = Result<Vec<FoodItem>, CoreError>> + Send;

    fn update(&self, item: FoodItem) -> impl Future<Output = Result<FoodItem, CoreError>> + Send;

    fn delete(&self, item_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Batch removal for account teardown. Returns the number of rows removed.
    fn delete_by_user(&self, user_id: Uuid) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

/// Service trait for inventory business logic
#[cfg_attr(test, mockall::automock)]
pub trait FoodItemService: Send + Sync {
    fn create_item(
        &self,
        identity: Identity,
        input: CreateFoodItemInput,
    ) -> impl Future<Output = Result<FoodItem, CoreError>> + Send;

    fn list_items(
        &self,
        identity: Identity,
        input: GetFoodItemsInput,
    ) -> impl Future<Output = Result<FoodItemList, CoreError>> + Send;

    fn update_item(
        &self,
        identity: Identity,
        input: UpdateFoodItemInput,
    ) -> impl Future<Output = Result<FoodItem, CoreError>> + Send;

    fn delete_item(
        &self,
        identity: Identity,
        item_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
