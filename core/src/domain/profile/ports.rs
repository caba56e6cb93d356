use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    identity::value_objects::Identity,
    profile::{
        entities::UserProfile,
        value_objects::{
            DeleteAccountInput, DeletedAccount, RegisterPushTokenInput,
            SetNotificationFrequencyInput, UpdateNicknameInput,
        },
    },
};

/// Repository trait for the one-row-per-user profile collection
#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    fn get_by_user_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<UserProfile>, CoreError>> + Send;

    /// Merge-style write: inserts the row or updates the provided fields.
    fn upsert(
        &self,
        profile: UserProfile,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn delete(&self, user_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for profile and account lifecycle
#[cfg_attr(test, mockall::automock)]
pub trait ProfileService: Send + Sync {
    fn get_profile(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn update_nickname(
        &self,
        identity: Identity,
        input: UpdateNicknameInput,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn set_notification_frequency(
        &self,
        identity: Identity,
        input: SetNotificationFrequencyInput,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn register_push_token(
        &self,
        identity: Identity,
        input: RegisterPushTokenInput,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn delete_account(
        &self,
        identity: Identity,
        input: DeleteAccountInput,
    ) -> impl Future<Output = Result<DeletedAccount, CoreError>> + Send;
}
