use axum::{Json, extract::State};
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        profile::validators::UpdateNicknameRequest,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};
use virtualfridge_core::domain::profile::{
    entities::UserProfile, ports::ProfileService, value_objects::UpdateNicknameInput,
};

#[utoipa::path(
    put,
    path = "/nickname",
    tag = "profile",
    summary = "Update nickname",
    request_body = UpdateNicknameRequest,
    responses(
        (status = 200, body = UserProfile),
        (status = 400, description = "Bad request")
    )
)]
pub async fn update_nickname(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(request): Json<UpdateNicknameRequest>,
) -> Result<Response<UserProfile>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let profile = state
        .service
        .update_nickname(
            identity,
            UpdateNicknameInput {
                nickname: request.nickname,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(profile))
}
