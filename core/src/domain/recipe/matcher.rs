use crate::domain::recipe::{
    catalog::RecipeCatalog,
    entities::Recipe,
    value_objects::{IngredientMatch, RecipeMatch, RecipePage, RecipeSort},
};

pub const PAGE_SIZE: usize = 10;

/// Bidirectional substring containment: "egg" covers "eggplant" and vice
/// versa. A known false-positive source, kept deliberately — it is the
/// relevance heuristic the product shipped with.
fn ingredient_in_inventory(ingredient: &str, inventory: &[String]) -> bool {
    let ingredient = ingredient.to_lowercase();
    inventory
        .iter()
        .any(|item| ingredient.contains(item.as_str()) || item.contains(&ingredient))
}

/// Scores one recipe against lowercased inventory names. Each ingredient
/// lands in exactly one bucket: matched or missing.
pub fn score_recipe(recipe: &Recipe, inventory: &[String]) -> RecipeMatch {
    let ingredients: Vec<IngredientMatch> = recipe
        .ingredients
        .iter()
        .map(|name| IngredientMatch {
            name: name.clone(),
            in_inventory: ingredient_in_inventory(name, inventory),
        })
        .collect();

    let match_count = ingredients.iter().filter(|i| i.in_inventory).count();
    let missing_count = ingredients.len() - match_count;

    RecipeMatch {
        recipe: recipe.clone(),
        match_count,
        missing_count,
        ingredients,
        image_url: None,
    }
}

/// Relevance-ordered, paged matching over the catalog.
///
/// `inventory` must already be lowercased. Recipes without ingredients are
/// excluded; a non-empty query keeps only recipes whose name contains it
/// (case-insensitive). Both sort modes are stable, so ties keep catalog
/// order. Any page index is valid; out-of-range pages are empty.
pub fn match_recipes(
    catalog: &RecipeCatalog,
    inventory: &[String],
    query: &str,
    sort: RecipeSort,
    page: usize,
) -> RecipePage {
    let query = query.trim().to_lowercase();

    let mut matches: Vec<RecipeMatch> = catalog
        .recipes()
        .iter()
        .filter(|recipe| !recipe.ingredients.is_empty())
        .filter(|recipe| query.is_empty() || recipe.name.to_lowercase().contains(&query))
        .map(|recipe| score_recipe(recipe, inventory))
        .collect();

    match sort {
        RecipeSort::TopMatching => matches.sort_by(|a, b| b.match_count.cmp(&a.match_count)),
        RecipeSort::TopMissing => matches.sort_by(|a, b| a.missing_count.cmp(&b.missing_count)),
    }

    let total = matches.len();
    let total_pages = total.div_ceil(PAGE_SIZE).max(1);

    let matches = matches
        .into_iter()
        .skip(page * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();

    RecipePage {
        matches,
        page,
        total_pages,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(name: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            name: name.to_string(),
            description: None,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            steps: vec![],
        }
    }

    fn inventory(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_lowercase()).collect()
    }

    #[test]
    fn test_omelette_example() {
        // The worked example: "eggs" covers "egg" by containment, "milk"
        // has no overlap.
        let r = recipe("Omelette", &["egg", "milk"]);
        let scored = score_recipe(&r, &inventory(&["eggs"]));
        assert_eq!(scored.match_count, 1);
        assert_eq!(scored.missing_count, 1);
        assert!(scored.ingredients[0].in_inventory);
        assert!(!scored.ingredients[1].in_inventory);
    }

    #[test]
    fn test_containment_is_bidirectional() {
        let r = recipe("Ratatouille", &["eggplant"]);
        assert_eq!(score_recipe(&r, &inventory(&["egg"])).match_count, 1);

        let r = recipe("Breakfast", &["egg"]);
        assert_eq!(score_recipe(&r, &inventory(&["eggplant"])).match_count, 1);
    }

    #[test]
    fn test_each_ingredient_counted_once() {
        let r = recipe("Double Egg", &["egg", "egg white"]);
        let scored = score_recipe(&r, &inventory(&["egg", "eggs", "egg carton"]));
        assert_eq!(scored.match_count + scored.missing_count, 2);
    }

    #[test]
    fn test_empty_inventory_degenerates_to_catalog_order() {
        let catalog = RecipeCatalog::from_recipes(vec![
            recipe("First", &["a"]),
            recipe("Second", &["b"]),
            recipe("Third", &["c"]),
        ]);

        let page = match_recipes(&catalog, &[], "", RecipeSort::TopMatching, 0);
        let names: Vec<&str> = page.matches.iter().map(|m| m.recipe.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
        assert!(page.matches.iter().all(|m| m.match_count == 0));
        assert!(
            page.matches
                .iter()
                .all(|m| m.missing_count == m.recipe.ingredients.len())
        );
    }

    #[test]
    fn test_top_matching_is_stable_descending() {
        let catalog = RecipeCatalog::from_recipes(vec![
            recipe("Low", &["tofu"]),
            recipe("HighA", &["egg", "milk"]),
            recipe("HighB", &["egg", "milk"]),
        ]);

        let page = match_recipes(
            &catalog,
            &inventory(&["egg", "milk"]),
            "",
            RecipeSort::TopMatching,
            0,
        );
        let names: Vec<&str> = page.matches.iter().map(|m| m.recipe.name.as_str()).collect();
        // Equal scores keep their relative catalog order.
        assert_eq!(names, vec!["HighA", "HighB", "Low"]);
    }

    #[test]
    fn test_top_missing_is_stable_ascending() {
        let catalog = RecipeCatalog::from_recipes(vec![
            recipe("ManyMissing", &["a", "b", "c"]),
            recipe("FewMissingA", &["egg", "salt"]),
            recipe("FewMissingB", &["milk", "pepper"]),
        ]);

        let page = match_recipes(
            &catalog,
            &inventory(&["egg", "milk"]),
            "",
            RecipeSort::TopMissing,
            0,
        );
        let names: Vec<&str> = page.matches.iter().map(|m| m.recipe.name.as_str()).collect();
        assert_eq!(names, vec!["FewMissingA", "FewMissingB", "ManyMissing"]);
    }

    #[test]
    fn test_query_filters_by_name_substring() {
        let catalog = RecipeCatalog::from_recipes(vec![
            recipe("Chicken Soup", &["chicken"]),
            recipe("Beef Stew", &["beef"]),
            recipe("chicken tacos", &["chicken", "tortilla"]),
        ]);

        let page = match_recipes(&catalog, &[], "CHICK", RecipeSort::TopMatching, 0);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_recipes_without_ingredients_are_excluded() {
        let catalog =
            RecipeCatalog::from_recipes(vec![recipe("Empty", &[]), recipe("Real", &["rice"])]);

        let page = match_recipes(&catalog, &[], "", RecipeSort::TopMatching, 0);
        assert_eq!(page.total, 1);
        assert_eq!(page.matches[0].recipe.name, "Real");
    }

    #[test]
    fn test_pagination_bounds() {
        let recipes: Vec<Recipe> = (0..23)
            .map(|i| recipe(&format!("Recipe {i}"), &["x"]))
            .collect();
        let catalog = RecipeCatalog::from_recipes(recipes);

        let first = match_recipes(&catalog, &[], "", RecipeSort::TopMatching, 0);
        assert_eq!(first.matches.len(), 10);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total, 23);

        let last = match_recipes(&catalog, &[], "", RecipeSort::TopMatching, 2);
        assert_eq!(last.matches.len(), 3);

        let beyond = match_recipes(&catalog, &[], "", RecipeSort::TopMatching, 7);
        assert!(beyond.matches.is_empty());
        assert_eq!(beyond.total_pages, 3);
    }

    #[test]
    fn test_empty_catalog_keeps_page_zero_valid() {
        let page = match_recipes(
            &RecipeCatalog::default(),
            &[],
            "",
            RecipeSort::TopMatching,
            0,
        );
        assert!(page.matches.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total, 0);
    }
}
