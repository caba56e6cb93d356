use chrono::{Duration, Utc};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_item::{
        entities::{FoodItem, FoodItemConfig},
        ports::FoodItemRepository,
    },
    health::ports::HealthCheckRepository,
    identity::{ports::IdentityProviderPort, value_objects::Identity},
    ingestion::{
        json_repair::parse_items,
        ports::{IngestionService, LlmClient},
        prompts,
        value_objects::{ScanPhotoInput, ScanSummary},
    },
    media::ports::{ImageSearchClient, VideoSearchClient},
    profile::ports::ProfileRepository,
};

impl<F, P, L, IS, VS, IP, HC> IngestionService for Service<F, P, L, IS, VS, IP, HC>
where
    F: FoodItemRepository,
    P: ProfileRepository,
    L: LlmClient,
    IS: ImageSearchClient,
    VS: VideoSearchClient,
    IP: IdentityProviderPort,
    HC: HealthCheckRepository,
{
    async fn scan_photo(
        &self,
        identity: Identity,
        input: ScanPhotoInput,
    ) -> Result<ScanSummary, CoreError> {
        // 1. Ask the model for a structured item list
        let content = self
            .llm_client
            .chat_with_image(
                prompts::system_prompt(input.kind).to_string(),
                prompts::instruction(input.kind).to_string(),
                input.image_data,
            )
            .await?;

        // 2. Repair the reply and validate each object
        let (parsed, rejected) = parse_items(&content).ok_or_else(|| {
            tracing::error!("no JSON array in LLM reply: {content}");
            CoreError::ExternalServiceError("LLM reply contained no item list".to_string())
        })?;

        // 3. Persist what survived validation; a single failed write does
        //    not abort the rest of the batch
        let now = Utc::now();
        let mut items = Vec::with_capacity(parsed.len());

        for parsed_item in parsed {
            let item = FoodItem::new(FoodItemConfig {
                user_id: identity.id(),
                name: parsed_item.name,
                quantity: parsed_item.quantity as f64,
                unit: parsed_item.unit,
                category: parsed_item.category,
                expiration: now + Duration::days(parsed_item.expiration_days),
            });

            match self.food_item_repository.create(item).await {
                Ok(created) => items.push(created),
                Err(err) => {
                    tracing::error!("failed to persist scanned item: {err}");
                }
            }
        }

        Ok(ScanSummary {
            added: items.len(),
            rejected,
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        food_item::ports::MockFoodItemRepository,
        health::ports::MockHealthCheckRepository,
        identity::ports::MockIdentityProviderPort,
        ingestion::{entities::ScanKind, ports::MockLlmClient},
        media::{
            cache::RecipeImageCache,
            ports::{MockImageSearchClient, MockVideoSearchClient},
        },
        profile::ports::MockProfileRepository,
        recipe::catalog::RecipeCatalog,
    };
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

    fn service_with(
        food_item_repository: MockFoodItemRepository,
        llm_client: MockLlmClient,
    ) -> TestService {
        Service::new(
            food_item_repository,
            MockProfileRepository::new(),
            llm_client,
            MockImageSearchClient::new(),
            MockVideoSearchClient::new(),
            MockIdentityProviderPort::new(),
            MockHealthCheckRepository::new(),
            RecipeCatalog::default(),
            RecipeImageCache::new(16),
        )
    }

    #[tokio::test]
    async fn test_scan_photo_persists_valid_items_and_counts_rejects() {
        let reply = concat!(
            "Here is what I found:\n",
            r#"[{"name":"Banana","quantity":5,"unit":"pieces","category":"Fruits","expiration_days":5},"#,
            r#"{"name":"Mystery","quantity":"many","unit":"pieces","category":"Other","expiration_days":3}]"#,
        )
        .to_string();

        let mut llm = MockLlmClient::new();
        llm.expect_chat_with_image().returning(move |_, _, _| {
            let reply = reply.clone();
            Box::pin(async move { Ok(reply) })
        });

        let mut repo = MockFoodItemRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|item| Box::pin(async move { Ok(item) }));

        let service = service_with(repo, llm);
        let summary = service
            .scan_photo(
                Identity::new(Uuid::new_v4(), None),
                ScanPhotoInput {
                    kind: ScanKind::Receipt,
                    image_data: vec![0xFF, 0xD8],
                },
            )
            .await
            .unwrap();

        assert_eq!(summary.added, 1);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.items[0].name, "Banana");
        assert_eq!(summary.items[0].days_until_expiration(Utc::now()), 5);
    }

    #[tokio::test]
    async fn test_scan_photo_fails_without_item_list() {
        let mut llm = MockLlmClient::new();
        llm.expect_chat_with_image()
            .returning(|_, _, _| Box::pin(async { Ok("no food here".to_string()) }));

        let service = service_with(MockFoodItemRepository::new(), llm);
        let result = service
            .scan_photo(
                Identity::new(Uuid::new_v4(), None),
                ScanPhotoInput {
                    kind: ScanKind::Fridge,
                    image_data: vec![],
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_scan_photo_continues_after_failed_write() {
        let reply = concat!(
            r#"[{"name":"A","quantity":1,"unit":"kg","category":"Meat","expiration_days":2},"#,
            r#"{"name":"B","quantity":1,"unit":"kg","category":"Meat","expiration_days":2}]"#,
        )
        .to_string();

        let mut llm = MockLlmClient::new();
        llm.expect_chat_with_image().returning(move |_, _, _| {
            let reply = reply.clone();
            Box::pin(async move { Ok(reply) })
        });

        let mut repo = MockFoodItemRepository::new();
        let mut calls = 0;
        repo.expect_create().times(2).returning(move |item| {
            calls += 1;
            if calls == 1 {
                Box::pin(async { Err(CoreError::InternalServerError) })
            } else {
                Box::pin(async move { Ok(item) })
            }
        });

        let service = service_with(repo, llm);
        let summary = service
            .scan_photo(
                Identity::new(Uuid::new_v4(), None),
                ScanPhotoInput {
                    kind: ScanKind::Receipt,
                    image_data: vec![],
                },
            )
            .await
            .unwrap();

        assert_eq!(summary.added, 1);
        assert_eq!(summary.items[0].name, "B");
    }
}
