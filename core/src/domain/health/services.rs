use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_item::ports::FoodItemRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    identity::ports::IdentityProviderPort,
    ingestion::ports::LlmClient,
    media::ports::{ImageSearchClient, VideoSearchClient},
    profile::ports::ProfileRepository,
};

impl<F, P, L, IS, VS, IP, HC> HealthCheckService for Service<F, P, L, IS, VS, IP, HC>
where
    F: FoodItemRepository,
    P: ProfileRepository,
    L: LlmClient,
    IS: ImageSearchClient,
    VS: VideoSearchClient,
    IP: IdentityProviderPort,
    HC: HealthCheckRepository,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
