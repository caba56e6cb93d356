use axum::{Json, extract::State};
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        profile::validators::RegisterPushTokenRequest,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};
use virtualfridge_core::domain::profile::{
    entities::UserProfile, ports::ProfileService, value_objects::RegisterPushTokenInput,
};

#[utoipa::path(
    put,
    path = "/push-token",
    tag = "profile",
    summary = "Register a push token",
    description = "Persists the device's messaging token to the caller's profile, merge-style",
    request_body = RegisterPushTokenRequest,
    responses(
        (status = 200, body = UserProfile),
        (status = 400, description = "Bad request")
    )
)]
pub async fn register_push_token(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(request): Json<RegisterPushTokenRequest>,
) -> Result<Response<UserProfile>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let profile = state
        .service
        .register_push_token(
            identity,
            RegisterPushTokenInput {
                token: request.token,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(profile))
}
