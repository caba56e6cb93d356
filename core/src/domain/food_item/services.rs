use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, policies::ensure_owner, services::Service},
    food_item::{
        entities::{FoodItem, FoodItemConfig},
        ports::{FoodItemRepository, FoodItemService},
        value_objects::{
            CreateFoodItemInput, FoodItemList, GetFoodItemsFilter, GetFoodItemsInput,
            UpdateFoodItemInput,
        },
    },
    health::ports::HealthCheckRepository,
    identity::{ports::IdentityProviderPort, value_objects::Identity},
    ingestion::ports::LlmClient,
    media::ports::{ImageSearchClient, VideoSearchClient},
    profile::ports::ProfileRepository,
};

impl<F, P, L, IS, VS, IP, HC> FoodItemService for Service<F, P, L, IS, VS, IP, HC>
where
    F: FoodItemRepository,
    P: ProfileRepository,
    L: LlmClient,
    IS: ImageSearchClient,
    VS: VideoSearchClient,
    IP: IdentityProviderPort,
    HC: HealthCheckRepository,
{
    async fn create_item(
        &self,
        identity: Identity,
        input: CreateFoodItemInput,
    ) -> Result<FoodItem, CoreError> {
        let item = FoodItem::new(FoodItemConfig {
            user_id: identity.id(),
            name: input.name,
            quantity: input.quantity,
            unit: input.unit,
            category: input.category,
            expiration: input.expiration,
        });

        self.food_item_repository.create(item).await
    }

    async fn list_items(
        &self,
        identity: Identity,
        input: GetFoodItemsInput,
    ) -> Result<FoodItemList, CoreError> {
        let filter = GetFoodItemsFilter {
            category: input.category,
            name_contains: input.search,
        };

        let mut items = self
            .food_item_repository
            .get_by_user(identity.id(), filter)
            .await?;

        let now = Utc::now();
        items.sort_by_key(|item| item.days_until_expiration(now));

        let expiring_soon = items
            .iter()
            .filter(|item| (0..=2).contains(&item.days_until_expiration(now)))
            .count();
        let expired = items
            .iter()
            .filter(|item| item.days_until_expiration(now) < 0)
            .count();

        Ok(FoodItemList {
            total: items.len(),
            expiring_soon,
            expired,
            items,
        })
    }

    async fn update_item(
        &self,
        identity: Identity,
        input: UpdateFoodItemInput,
    ) -> Result<FoodItem, CoreError> {
        let existing = self
            .food_item_repository
            .get_by_id(input.item_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_owner(&identity, existing.user_id, "item belongs to another user")?;

        let updated = FoodItem {
            name: input.name,
            quantity: input.quantity,
            unit: input.unit,
            category: input.category,
            expiration: input.expiration,
            updated_at: Utc::now(),
            ..existing
        };

        self.food_item_repository.update(updated).await
    }

    async fn delete_item(&self, identity: Identity, item_id: Uuid) -> Result<(), CoreError> {
        let existing = self
            .food_item_repository
            .get_by_id(item_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_owner(&identity, existing.user_id, "item belongs to another user")?;

        self.food_item_repository.delete(item_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        food_item::{entities::{Category, Unit}, ports::MockFoodItemRepository},
        health::ports::MockHealthCheckRepository,
        identity::ports::MockIdentityProviderPort,
        ingestion::ports::MockLlmClient,
        media::{
            cache::RecipeImageCache,
            ports::{MockImageSearchClient, MockVideoSearchClient},
        },
        profile::ports::MockProfileRepository,
        recipe::catalog::RecipeCatalog,
    };
    use chrono::Duration;

    type TestService = Service<
        MockFoodItemRepository,
        MockProfileRepository,
        MockLlmClient,
        MockImageSearchClient,
        MockVideoSearchClient,
        MockIdentityProviderPort,
        MockHealthCheckRepository,
    >;

    fn service_with(food_item_repository: MockFoodItemRepository) -> TestService {
        Service::new(
            food_item_repository,
            MockProfileRepository::new(),
            MockLlmClient::new(),
            MockImageSearchClient::new(),
            MockVideoSearchClient::new(),
            MockIdentityProviderPort::new(),
            MockHealthCheckRepository::new(),
            RecipeCatalog::default(),
            RecipeImageCache::new(16),
        )
    }

    fn item_for(user_id: Uuid, name: &str, days: i64) -> FoodItem {
        FoodItem::new(FoodItemConfig {
            user_id,
            name: name.to_string(),
            quantity: 1.0,
            unit: Unit::Pieces,
            category: Category::Other,
            expiration: Utc::now() + Duration::days(days),
        })
    }

    #[tokio::test]
    async fn test_create_item_is_scoped_to_caller() {
        let user_id = Uuid::new_v4();
        let mut repo = MockFoodItemRepository::new();
        repo.expect_create()
            .withf(move |item| item.user_id == user_id)
            .returning(|item| Box::pin(async move { Ok(item) }));

        let service = service_with(repo);
        let created = service
            .create_item(
                Identity::new(user_id, None),
                CreateFoodItemInput {
                    name: "Eggs".to_string(),
                    quantity: 12.0,
                    unit: Unit::Pieces,
                    category: Category::Other,
                    expiration: Utc::now() + Duration::days(14),
                },
            )
            .await
            .unwrap();

        assert_eq!(created.user_id, user_id);
        assert_eq!(created.name, "Eggs");
    }

    #[tokio::test]
    async fn test_list_items_sorts_and_counts() {
        let user_id = Uuid::new_v4();
        let items = vec![
            item_for(user_id, "Yogurt", 5),
            item_for(user_id, "Milk", -1),
            item_for(user_id, "Spinach", 1),
        ];
        let mut repo = MockFoodItemRepository::new();
        repo.expect_get_by_user()
            .returning(move |_, _| {
                let items = items.clone();
                Box::pin(async move { Ok(items) })
            });

        let service = service_with(repo);
        let list = service
            .list_items(Identity::new(user_id, None), GetFoodItemsInput::default())
            .await
            .unwrap();

        assert_eq!(list.total, 3);
        assert_eq!(list.expired, 1);
        assert_eq!(list.expiring_soon, 1);
        let names: Vec<&str> = list.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Spinach", "Yogurt"]);
    }

    #[tokio::test]
    async fn test_update_item_rejects_foreign_item() {
        let owner = Uuid::new_v4();
        let other = Identity::new(Uuid::new_v4(), None);
        let existing = item_for(owner, "Cheese", 10);
        let item_id = existing.id;

        let mut repo = MockFoodItemRepository::new();
        repo.expect_get_by_id().returning(move |_| {
            let existing = existing.clone();
            Box::pin(async move { Ok(Some(existing)) })
        });

        let service = service_with(repo);
        let result = service
            .update_item(
                other,
                UpdateFoodItemInput {
                    item_id,
                    name: "Cheese".to_string(),
                    quantity: 2.0,
                    unit: Unit::Pieces,
                    category: Category::Dairy,
                    expiration: Utc::now(),
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_delete_item_missing_is_not_found() {
        let mut repo = MockFoodItemRepository::new();
        repo.expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = service_with(repo);
        let result = service
            .delete_item(Identity::new(Uuid::new_v4(), None), Uuid::new_v4())
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }
}
