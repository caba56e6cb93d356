use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    media::entities::{RecipeImage, RecipeVideo},
};

/// Outbound image search (one representative photo per query)
#[cfg_attr(test, mockall::automock)]
pub trait ImageSearchClient: Send + Sync {
    fn search_image(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Option<RecipeImage>, CoreError>> + Send;
}

/// Outbound tutorial video search (top result only)
#[cfg_attr(test, mockall::automock)]
pub trait VideoSearchClient: Send + Sync {
    fn search_video(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Option<RecipeVideo>, CoreError>> + Send;
}

/// Service trait for recipe media lookups
#[cfg_attr(test, mockall::automock)]
pub trait MediaService: Send + Sync {
    /// Cached image resolution. A failed or empty lookup yields `None` and
    /// caches nothing, so the next request tries again.
    fn resolve_recipe_image(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Option<RecipeImage>, CoreError>> + Send;

    fn find_tutorial_video(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Option<RecipeVideo>, CoreError>> + Send;
}
