use axum::{Json, extract::State};
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        profile::validators::DeleteAccountRequest,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};
use virtualfridge_core::domain::profile::{
    ports::ProfileService,
    value_objects::{DeleteAccountInput, DeletedAccount},
};

#[utoipa::path(
    delete,
    path = "/account",
    tag = "profile",
    summary = "Delete the account",
    description = "Re-authenticates, removes the caller's data best-effort, then deletes the auth user",
    request_body = DeleteAccountRequest,
    responses(
        (status = 200, body = DeletedAccount),
        (status = 401, description = "Re-authentication failed"),
        (status = 502, description = "Identity provider failure")
    )
)]
pub async fn delete_account(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(request): Json<DeleteAccountRequest>,
) -> Result<Response<DeletedAccount>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let deleted = state
        .service
        .delete_account(
            identity,
            DeleteAccountInput {
                password: request.password,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(deleted))
}
