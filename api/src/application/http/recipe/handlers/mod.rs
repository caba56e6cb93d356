pub mod get_recipe_suggestions;
pub mod get_recipe_video;
