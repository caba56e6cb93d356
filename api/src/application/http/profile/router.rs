use super::handlers::{
    delete_account::{__path_delete_account, delete_account},
    get_profile::{__path_get_profile, get_profile},
    register_push_token::{__path_register_push_token, register_push_token},
    set_notification_frequency::{__path_set_notification_frequency, set_notification_frequency},
    update_nickname::{__path_update_nickname, update_nickname},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{delete, get, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_profile,
    update_nickname,
    set_notification_frequency,
    register_push_token,
    delete_account
))]
pub struct ProfileApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/profile", state.args.server.root_path),
            get(get_profile),
        )
        .route(
            &format!("{}/profile/nickname", state.args.server.root_path),
            put(update_nickname),
        )
        .route(
            &format!("{}/profile/notifications", state.args.server.root_path),
            put(set_notification_frequency),
        )
        .route(
            &format!("{}/profile/push-token", state.args.server.root_path),
            put(register_push_token),
        )
        .route(
            &format!("{}/profile/account", state.args.server.root_path),
            delete(delete_account),
        )
        .layer(middleware::from_fn(auth))
}
