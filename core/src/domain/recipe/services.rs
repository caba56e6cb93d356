use futures::future::join_all;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_item::{ports::FoodItemRepository, value_objects::GetFoodItemsFilter},
    health::ports::HealthCheckRepository,
    identity::{ports::IdentityProviderPort, value_objects::Identity},
    ingestion::ports::LlmClient,
    media::ports::{ImageSearchClient, MediaService, VideoSearchClient},
    profile::ports::ProfileRepository,
    recipe::{
        matcher::match_recipes,
        ports::RecipeService,
        value_objects::{RecipePage, RecipeSuggestionsInput},
    },
};

impl<F, P, L, IS, VS, IP, HC> RecipeService for Service<F, P, L, IS, VS, IP, HC>
where
    F: FoodItemRepository,
    P: ProfileRepository,
    L: LlmClient,
    IS: ImageSearchClient,
    VS: VideoSearchClient,
    IP: IdentityProviderPort,
    HC: HealthCheckRepository,
{
    async fn suggest_recipes(
        &self,
        identity: Identity,
        input: RecipeSuggestionsInput,
    ) -> Result<RecipePage, CoreError> {
        // 1. Current inventory names, lowercased for containment matching
        let items = self
            .food_item_repository
            .get_by_user(identity.id(), GetFoodItemsFilter::default())
            .await?;
        let inventory: Vec<String> = items.iter().map(|item| item.name.to_lowercase()).collect();

        // 2. Score, sort and page the catalog
        let mut page = match_recipes(
            &self.recipe_catalog,
            &inventory,
            &input.query,
            input.sort,
            input.page,
        );

        // 3. Attach a representative photo to each match on the page
        let images = join_all(
            page.matches
                .iter()
                .map(|m| self.resolve_recipe_image(m.recipe.image_query())),
        )
        .await;

        for (entry, image) in page.matches.iter_mut().zip(images) {
            entry.image_url = image.unwrap_or(None).map(|image| image.url);
        }

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        food_item::{
            entities::{Category, FoodItem, FoodItemConfig, Unit},
            ports::MockFoodItemRepository,
        },
        health::ports::MockHealthCheckRepository,
        identity::ports::MockIdentityProviderPort,
        ingestion::ports::MockLlmClient,
        media::{
            cache::RecipeImageCache,
            entities::RecipeImage,
            ports::{MockImageSearchClient, MockVideoSearchClient},
        },
        recipe::{catalog::RecipeCatalog, entities::Recipe, value_objects::RecipeSort},
        profile::ports::MockProfileRepository,
    };
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    type TestService = Service<
        MockFoodItemRepository,
        MockProfileRepository,
        MockLlmClient,
        MockImageSearchClient,
        MockVideoSearchClient,
        MockIdentityProviderPort,
        MockHealthCheckRepository,
    >;

    fn inventory_repo(user_id: Uuid, names: &[&str]) -> MockFoodItemRepository {
        let items: Vec<FoodItem> = names
            .iter()
            .map(|name| {
                FoodItem::new(FoodItemConfig {
                    user_id,
                    name: name.to_string(),
                    quantity: 1.0,
                    unit: Unit::Pieces,
                    category: Category::Other,
                    expiration: Utc::now() + Duration::days(7),
                })
            })
            .collect();

        let mut repo = MockFoodItemRepository::new();
        repo.expect_get_by_user().returning(move |_, _| {
            let items = items.clone();
            Box::pin(async move { Ok(items) })
        });
        repo
    }

    fn catalog() -> RecipeCatalog {
        RecipeCatalog::from_recipes(vec![
            Recipe {
                name: "Omelette".to_string(),
                description: Some("Fluffy eggs".to_string()),
                ingredients: vec!["egg".to_string(), "milk".to_string()],
                steps: vec![],
            },
            Recipe {
                name: "Beef Stew".to_string(),
                description: None,
                ingredients: vec!["beef".to_string(), "potato".to_string()],
                steps: vec![],
            },
        ])
    }

    #[tokio::test]
    async fn test_suggest_recipes_scores_against_inventory() {
        let user_id = Uuid::new_v4();
        let mut images = MockImageSearchClient::new();
        images.expect_search_image().returning(|query| {
            Box::pin(async move {
                Ok(Some(RecipeImage {
                    url: format!("https://images.example/{}", query.len()),
                }))
            })
        });

        let service = TestService::new(
            inventory_repo(user_id, &["Eggs", "Milk"]),
            MockProfileRepository::new(),
            MockLlmClient::new(),
            images,
            MockVideoSearchClient::new(),
            MockIdentityProviderPort::new(),
            MockHealthCheckRepository::new(),
            catalog(),
            RecipeImageCache::new(16),
        );

        let page = service
            .suggest_recipes(
                Identity::new(user_id, None),
                RecipeSuggestionsInput {
                    query: String::new(),
                    sort: RecipeSort::TopMatching,
                    page: 0,
                },
            )
            .await
            .unwrap();

        assert_eq!(page.total, 2);
        assert_eq!(page.matches[0].recipe.name, "Omelette");
        assert_eq!(page.matches[0].match_count, 2);
        assert!(page.matches[0].image_url.is_some());
    }

    #[tokio::test]
    async fn test_suggest_recipes_survives_image_lookup_failure() {
        let user_id = Uuid::new_v4();
        let mut images = MockImageSearchClient::new();
        images.expect_search_image().returning(|_| {
            Box::pin(async {
                Err(CoreError::ExternalServiceError(
                    "image search down".to_string(),
                ))
            })
        });

        let service = TestService::new(
            inventory_repo(user_id, &[]),
            MockProfileRepository::new(),
            MockLlmClient::new(),
            images,
            MockVideoSearchClient::new(),
            MockIdentityProviderPort::new(),
            MockHealthCheckRepository::new(),
            catalog(),
            RecipeImageCache::new(16),
        );

        let page = service
            .suggest_recipes(Identity::new(user_id, None), RecipeSuggestionsInput::default())
            .await
            .unwrap();

        assert_eq!(page.total, 2);
        assert!(page.matches.iter().all(|m| m.image_url.is_none()));
    }
}
