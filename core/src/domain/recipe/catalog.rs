use crate::domain::recipe::entities::Recipe;

const BUNDLED_CATALOG: &str = include_str!("../../../assets/recipes.json");

/// The bundled, read-only recipe list. A broken catalog degrades to an
/// empty one; matching then returns empty pages instead of erroring.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn load_bundled() -> Self {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Vec<Recipe>>(raw) {
            Ok(recipes) => Self { recipes },
            Err(err) => {
                tracing::error!("failed to parse recipe catalog: {err}");
                Self::default()
            }
        }
    }

    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Recipe> {
        self.recipes
            .iter()
            .find(|recipe| recipe.name.eq_ignore_ascii_case(name))
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
