use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Static reference data from the bundled catalog; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub name: String,
    pub description: Option<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl Recipe {
    /// Search text used to find a representative photo for the recipe.
    pub fn image_query(&self) -> String {
        match &self.description {
            Some(description) => format!("{} {}", self.name, description),
            None => self.name.clone(),
        }
    }
}
