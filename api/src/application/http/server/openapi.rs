use crate::application::http::{
    food_item::router::FoodItemApiDoc, health::router::HealthApiDoc,
    ingestion::router::IngestionApiDoc, profile::router::ProfileApiDoc,
    recipe::router::RecipeApiDoc, stats::router::StatsApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "VirtualFridge API"
    ),
    nest(
        (path = "/food-items", api = FoodItemApiDoc),
        (path = "/scan", api = IngestionApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/stats", api = StatsApiDoc),
        (path = "/profile", api = ProfileApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
