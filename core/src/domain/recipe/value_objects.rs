use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recipe::entities::Recipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecipeSort {
    /// Most ingredients already in the fridge first.
    #[default]
    TopMatching,
    /// Fewest missing ingredients first.
    TopMissing,
}

impl FromStr for RecipeSort {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top_matching" => Ok(RecipeSort::TopMatching),
            "top_missing" => Ok(RecipeSort::TopMissing),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecipeSuggestionsInput {
    pub query: String,
    pub sort: RecipeSort,
    pub page: usize,
}

/// Per-ingredient highlight: is the ingredient covered by the inventory?
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientMatch {
    pub name: String,
    pub in_inventory: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeMatch {
    pub recipe: Recipe,
    pub match_count: usize,
    pub missing_count: usize,
    pub ingredients: Vec<IngredientMatch>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipePage {
    pub matches: Vec<RecipeMatch>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
}
