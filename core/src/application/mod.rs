use crate::domain::{
    common::{VirtualFridgeConfig, services::Service},
    media::cache::RecipeImageCache,
    recipe::catalog::RecipeCatalog,
};
use crate::infrastructure::{
    db::postgres::{Postgres, PostgresConfig},
    food_item::PostgresFoodItemRepository,
    health::PostgresHealthCheckRepository,
    identity::FirebaseIdentityProvider,
    llm::OpenAiLlmClient,
    media::{PexelsImageSearchClient, YoutubeVideoSearchClient},
    profile::PostgresProfileRepository,
};

pub type VirtualFridgeService = Service<
    PostgresFoodItemRepository,
    PostgresProfileRepository,
    OpenAiLlmClient,
    PexelsImageSearchClient,
    YoutubeVideoSearchClient,
    FirebaseIdentityProvider,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(
    config: VirtualFridgeConfig,
) -> Result<VirtualFridgeService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;
    let db = postgres.get_db();

    Ok(Service::new(
        PostgresFoodItemRepository::new(db.clone()),
        PostgresProfileRepository::new(db.clone()),
        OpenAiLlmClient::new(config.llm.openai_api_key, config.llm.openai_model),
        PexelsImageSearchClient::new(config.media.pexels_api_key),
        YoutubeVideoSearchClient::new(config.media.youtube_api_key),
        FirebaseIdentityProvider::new(config.identity_provider.firebase_api_key),
        PostgresHealthCheckRepository::new(db),
        RecipeCatalog::load_bundled(),
        RecipeImageCache::new(config.media.image_cache_capacity),
    ))
}
