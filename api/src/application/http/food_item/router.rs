use super::handlers::{
    create_food_item::{__path_create_food_item, create_food_item},
    delete_food_item::{__path_delete_food_item, delete_food_item},
    get_food_items::{__path_get_food_items, get_food_items},
    update_food_item::{__path_update_food_item, update_food_item},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{Router, middleware, routing::{get, put}};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    create_food_item,
    get_food_items,
    update_food_item,
    delete_food_item
))]
pub struct FoodItemApiDoc;

pub fn food_item_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/food-items", state.args.server.root_path),
            get(get_food_items).post(create_food_item),
        )
        .route(
            &format!("{}/food-items/{{item_id}}", state.args.server.root_path),
            put(update_food_item).delete(delete_food_item),
        )
        .layer(middleware::from_fn(auth))
}
