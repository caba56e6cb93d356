use axum::extract::State;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use virtualfridge_core::domain::profile::{entities::UserProfile, ports::ProfileService};

#[utoipa::path(
    get,
    path = "",
    tag = "profile",
    summary = "Get the caller's profile",
    responses(
        (status = 200, body = UserProfile)
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<UserProfile>, ApiError> {
    let profile = state
        .service
        .get_profile(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(profile))
}
