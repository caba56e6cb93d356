use chrono::Utc;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_item::ports::FoodItemRepository,
    health::ports::HealthCheckRepository,
    identity::{ports::IdentityProviderPort, value_objects::Identity},
    ingestion::ports::LlmClient,
    media::ports::{ImageSearchClient, VideoSearchClient},
    profile::{
        entities::UserProfile,
        ports::{ProfileRepository, ProfileService},
        value_objects::{
            DeleteAccountInput, DeletedAccount, RegisterPushTokenInput,
            SetNotificationFrequencyInput, UpdateNicknameInput,
        },
    },
};

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
    /// The stored profile, or a fresh default one when the user has never
    /// written profile data. The default is not persisted; the first
    /// merge-style update creates the row.
    async fn profile_or_default(&self, identity: &Identity) -> Result<UserProfile, CoreError> {
        let profile = self
            .profile_repository
            .get_by_user_id(identity.id())
            .await?;

        Ok(profile.unwrap_or_else(|| UserProfile::new(identity.id(), identity.email.clone())))
    }
}

impl<F, P, L, IS, VS, IP, HC> ProfileService for Service<F, P, L, IS, VS, IP, HC>
where
    F: FoodItemRepository,
    P: ProfileRepository,
    L: LlmClient,
    IS: ImageSearchClient,
    VS: VideoSearchClient,
    IP: IdentityProviderPort,
    HC: HealthCheckRepository,
{
    async fn get_profile(&self, identity: Identity) -> Result<UserProfile, CoreError> {
        self.profile_or_default(&identity).await
    }

    async fn update_nickname(
        &self,
        identity: Identity,
        input: UpdateNicknameInput,
    ) -> Result<UserProfile, CoreError> {
        let mut profile = self.profile_or_default(&identity).await?;
        profile.nickname = Some(input.nickname);
        profile.updated_at = Utc::now();

        self.profile_repository.upsert(profile).await
    }

    async fn set_notification_frequency(
        &self,
        identity: Identity,
        input: SetNotificationFrequencyInput,
    ) -> Result<UserProfile, CoreError> {
        let mut profile = self.profile_or_default(&identity).await?;
        profile.notification_frequency = input.frequency;
        profile.updated_at = Utc::now();

        self.profile_repository.upsert(profile).await
    }

    async fn register_push_token(
        &self,
        identity: Identity,
        input: RegisterPushTokenInput,
    ) -> Result<UserProfile, CoreError> {
        let mut profile = self.profile_or_default(&identity).await?;
        profile.push_token = Some(input.token);
        profile.updated_at = Utc::now();

        self.profile_repository.upsert(profile).await
    }

    async fn delete_account(
        &self,
        identity: Identity,
        input: DeleteAccountInput,
    ) -> Result<DeletedAccount, CoreError> {
        // 1. Re-authenticate before anything destructive
        let email = identity
            .email
            .clone()
            .ok_or(CoreError::InvalidCredentials)?;
        let verified = self
            .identity_provider
            .verify_credentials(email, input.password)
            .await?;
        if !verified {
            return Err(CoreError::InvalidCredentials);
        }

        // 2. Data cleanup is best effort: failures are logged, the cascade
        //    continues, and only the provider-side deletion below can fail
        //    the whole operation
        let items_deleted = match self
            .food_item_repository
            .delete_by_user(identity.id())
            .await
        {
            Ok(count) => count,
            Err(err) => {
                tracing::error!("failed to delete food items during teardown: {err}");
                0
            }
        };

        if let Err(err) = self.profile_repository.delete(identity.id()).await {
            tracing::error!("failed to delete profile during teardown: {err}");
        }

        // 3. Delete the auth user last
        self.identity_provider.delete_user(identity.id()).await?;

        Ok(DeletedAccount { items_deleted })
    }
}
