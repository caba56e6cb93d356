use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use virtualfridge_core::domain::profile::entities::NotificationFrequency;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateNicknameRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "nickname must be between 1 and 50 characters"
    ))]
    pub nickname: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SetNotificationFrequencyRequest {
    pub frequency: NotificationFrequency,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RegisterPushTokenRequest {
    #[validate(length(min = 1, message = "token must not be empty"))]
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct DeleteAccountRequest {
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}
