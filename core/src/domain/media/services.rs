use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_item::ports::FoodItemRepository,
    health::ports::HealthCheckRepository,
    identity::ports::IdentityProviderPort,
    ingestion::ports::LlmClient,
    media::{
        entities::{RecipeImage, RecipeVideo},
        ports::{ImageSearchClient, MediaService, VideoSearchClient},
    },
    profile::ports::ProfileRepository,
};

impl<F, P, L, IS, VS, IP, HC> MediaService for Service<F, P, L, IS, VS, IP, HC>
where
    F: FoodItemRepository,
    P: ProfileRepository,
    L: LlmClient,
    IS: ImageSearchClient,
    VS: VideoSearchClient,
    IP: IdentityProviderPort,
    HC: HealthCheckRepository,
{
    async fn resolve_recipe_image(&self, query: String) -> Result<Option<RecipeImage>, CoreError> {
        let key = query.to_lowercase();

        if let Some(cached) = self.image_cache.get(&key) {
            return Ok(Some(cached));
        }

        match self.image_search_client.search_image(query).await {
            Ok(Some(image)) => {
                self.image_cache.put(key, image.clone());
                Ok(Some(image))
            }
            Ok(None) => Ok(None),
            Err(err) => {
                tracing::warn!("image search failed for {key}: {err}");
                Ok(None)
            }
        }
    }

    async fn find_tutorial_video(&self, query: String) -> Result<Option<RecipeVideo>, CoreError> {
        self.video_search_client.search_video(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        food_item::ports::MockFoodItemRepository,
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

    type TestService = Service<
        MockFoodItemRepository,
        MockProfileRepository,
        MockLlmClient,
        MockImageSearchClient,
        MockVideoSearchClient,
        MockIdentityProviderPort,
        MockHealthCheckRepository,
    >;

    fn service_with(image_search_client: MockImageSearchClient) -> TestService {
        Service::new(
            MockFoodItemRepository::new(),
            MockProfileRepository::new(),
            MockLlmClient::new(),
            image_search_client,
            MockVideoSearchClient::new(),
            MockIdentityProviderPort::new(),
            MockHealthCheckRepository::new(),
            RecipeCatalog::default(),
            RecipeImageCache::new(16),
        )
    }

    #[tokio::test]
    async fn test_second_lookup_is_served_from_cache() {
        let mut client = MockImageSearchClient::new();
        // The network client must be hit exactly once for the same query.
        client.expect_search_image().times(1).returning(|_| {
            Box::pin(async {
                Ok(Some(RecipeImage {
                    url: "https://images.example/omelette.jpg".to_string(),
                }))
            })
        });

        let service = service_with(client);

        let first = service
            .resolve_recipe_image("Omelette Fluffy eggs".to_string())
            .await
            .unwrap()
            .unwrap();
        let second = service
            .resolve_recipe_image("Omelette Fluffy eggs".to_string())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_cache_key_is_case_insensitive() {
        let mut client = MockImageSearchClient::new();
        client.expect_search_image().times(1).returning(|_| {
            Box::pin(async {
                Ok(Some(RecipeImage {
                    url: "https://images.example/stew.jpg".to_string(),
                }))
            })
        });

        let service = service_with(client);
        service
            .resolve_recipe_image("Beef Stew".to_string())
            .await
            .unwrap();
        let hit = service
            .resolve_recipe_image("beef stew".to_string())
            .await
            .unwrap();

        assert!(hit.is_some());
    }

    #[tokio::test]
    async fn test_failure_caches_nothing_and_retries() {
        let mut client = MockImageSearchClient::new();
        let mut calls = 0;
        client.expect_search_image().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Box::pin(async {
                    Err(CoreError::ExternalServiceError("timeout".to_string()))
                })
            } else {
                Box::pin(async {
                    Ok(Some(RecipeImage {
                        url: "https://images.example/retry.jpg".to_string(),
                    }))
                })
            }
        });

        let service = service_with(client);

        let first = service
            .resolve_recipe_image("Pesto Pasta".to_string())
            .await
            .unwrap();
        assert!(first.is_none());

        let second = service
            .resolve_recipe_image("Pesto Pasta".to_string())
            .await
            .unwrap();
        assert!(second.is_some());
    }
}
