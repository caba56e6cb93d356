use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    identity::value_objects::Identity,
    recipe::value_objects::{RecipePage, RecipeSuggestionsInput},
};

/// Service trait for recipe suggestions
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn suggest_recipes(
        &self,
        identity: Identity,
        input: RecipeSuggestionsInput,
    ) -> impl Future<Output = Result<RecipePage, CoreError>> + Send;
}
