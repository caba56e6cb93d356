use std::future::Future;
use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

/// External identity provider the account lifecycle is delegated to.
#[cfg_attr(test, mockall::automock)]
pub trait IdentityProviderPort: Send + Sync {
    /// Re-authentication check before destructive account operations.
    fn verify_credentials(
        &self,
        email: String,
        password: String,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn delete_user(&self, user_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
