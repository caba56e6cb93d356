use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetRecipeSuggestionsParams {
    /// Name filter, case-insensitive substring. Debounce this client-side
    /// (~400 ms) rather than calling on every keystroke.
    pub query: Option<String>,
    /// "top_matching" (default) or "top_missing".
    pub sort: Option<String>,
    #[param(example = 0)]
    pub page: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetRecipeVideoParams {
    /// Recipe name to find a tutorial for.
    pub recipe: String,
}
