use crate::domain::{
    food_item::ports::FoodItemRepository,
    health::ports::HealthCheckRepository,
    identity::ports::IdentityProviderPort,
    ingestion::ports::LlmClient,
    media::{
        cache::RecipeImageCache,
        ports::{ImageSearchClient, VideoSearchClient},
    },
    profile::ports::ProfileRepository,
    recipe::catalog::RecipeCatalog,
};

/// Aggregate service the API layer talks to. Each domain module implements
/// its service trait for this struct, dispatching to the injected ports.
#[derive(Debug, Clone)]
pub struct Service<F, P, L, IS, VS, IP, HC>
where
    F: FoodItemRepository,
    P: ProfileRepository,
    L: LlmClient,
    IS: ImageSearchClient,
    VS: VideoSearchClient,
    IP: IdentityProviderPort,
    HC: HealthCheckRepository,
{
    pub food_item_repository: F,
    pub profile_repository: P,
    pub llm_client: L,
    pub image_search_client: IS,
    pub video_search_client: VS,
    pub identity_provider: IP,
    pub health_check_repository: HC,
    pub recipe_catalog: RecipeCatalog,
    pub image_cache: RecipeImageCache,
}

impl<F, P, L, IS, VS, IP, HC> Service<F, P, L, IS, VS, IP, HC>
where
    F: FoodItemRepository,
    P: ProfileRepository,
    L: LlmClient,
    IS: ImageSearchClient,
    VS: VideoSearchClient,
    IP: IdentityProviderPort,
    HC: HealthCheckRepository,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        food_item_repository: F,
        profile_repository: P,
        llm_client: L,
        image_search_client: IS,
        video_search_client: VS,
        identity_provider: IP,
        health_check_repository: HC,
        recipe_catalog: RecipeCatalog,
        image_cache: RecipeImageCache,
    ) -> Self {
        Self {
            food_item_repository,
            profile_repository,
            llm_client,
            image_search_client,
            video_search_client,
            identity_provider,
            health_check_repository,
            recipe_catalog,
            image_cache,
        }
    }
}
