use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::profile::entities::NotificationFrequency;

#[derive(Debug, Clone)]
pub struct UpdateNicknameInput {
    pub nickname: String,
}

#[derive(Debug, Clone)]
pub struct SetNotificationFrequencyInput {
    pub frequency: NotificationFrequency,
}

#[derive(Debug, Clone)]
pub struct RegisterPushTokenInput {
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct DeleteAccountInput {
    pub password: String,
}

/// Result of the teardown cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeletedAccount {
    pub items_deleted: u64,
}
