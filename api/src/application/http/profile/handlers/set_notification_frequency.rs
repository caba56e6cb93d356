use axum::{Json, extract::State};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        profile::validators::SetNotificationFrequencyRequest,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};
use virtualfridge_core::domain::profile::{
    entities::UserProfile, ports::ProfileService, value_objects::SetNotificationFrequencyInput,
};

#[utoipa::path(
    put,
    path = "/notifications",
    tag = "profile",
    summary = "Set notification frequency",
    request_body = SetNotificationFrequencyRequest,
    responses(
        (status = 200, body = UserProfile)
    )
)]
pub async fn set_notification_frequency(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(request): Json<SetNotificationFrequencyRequest>,
) -> Result<Response<UserProfile>, ApiError> {
    let profile = state
        .service
        .set_notification_frequency(
            identity,
            SetNotificationFrequencyInput {
                frequency: request.frequency,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(profile))
}
