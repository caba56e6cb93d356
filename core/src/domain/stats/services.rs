use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_item::{
        entities::{Category, FoodItem},
        ports::FoodItemRepository,
        value_objects::GetFoodItemsFilter,
    },
    health::ports::HealthCheckRepository,
    identity::{ports::IdentityProviderPort, value_objects::Identity},
    ingestion::ports::LlmClient,
    media::ports::{ImageSearchClient, VideoSearchClient},
    profile::ports::ProfileRepository,
    stats::{
        ports::StatsService,
        value_objects::{CategoryStat, DiversityLabel, InventoryOverview},
    },
};

/// Aggregates the fridge overview from the item list. Percentages are
/// rounded against max(total, 1) so an empty fridge yields all zeroes.
pub fn compute_overview(items: &[FoodItem], now: DateTime<Utc>) -> InventoryOverview {
    let total = items.len().max(1);

    let categories: Vec<CategoryStat> = Category::ALL
        .iter()
        .filter_map(|category| {
            let count = items.iter().filter(|i| i.category == *category).count();
            if count == 0 {
                return None;
            }
            let percentage = ((count as f64 / total as f64) * 100.0).round() as i32;
            Some(CategoryStat {
                category: *category,
                count,
                percentage,
            })
        })
        .collect();

    let expired_items = items.iter().filter(|i| i.expiration < now).count();

    let remaining_days: Vec<f64> = items
        .iter()
        .filter(|i| i.expiration >= now)
        .map(|i| i.days_until_expiration(now) as f64)
        .collect();
    let average_days_to_expiration = if remaining_days.is_empty() {
        0.0
    } else {
        remaining_days.iter().sum::<f64>() / remaining_days.len() as f64
    };

    let most_common_category = categories
        .iter()
        .max_by_key(|stat| stat.count)
        .map(|stat| stat.category);

    let present: HashSet<Category> = items.iter().map(|i| i.category).collect();
    let diversity_score = present.len() as f64 / Category::ALL.len() as f64;

    let suggestion = match Category::ALL.iter().find(|c| !present.contains(c)) {
        Some(missing) => format!(
            "Consider adding more {} items for a balanced fridge!",
            missing.as_str().to_lowercase()
        ),
        None => "Your fridge is well balanced!".to_string(),
    };

    InventoryOverview {
        total_items: items.len(),
        expired_items,
        average_days_to_expiration,
        most_common_category,
        categories,
        diversity_score,
        diversity_label: DiversityLabel::for_score(diversity_score),
        suggestion,
    }
}

impl<F, P, L, IS, VS, IP, HC> StatsService for Service<F, P, L, IS, VS, IP, HC>
where
    F: FoodItemRepository,
    P: ProfileRepository,
    L: LlmClient,
    IS: ImageSearchClient,
    VS: VideoSearchClient,
    IP: IdentityProviderPort,
    HC: HealthCheckRepository,
{
    async fn get_overview(&self, identity: Identity) -> Result<InventoryOverview, CoreError> {
        let items = self
            .food_item_repository
            .get_by_user(identity.id(), GetFoodItemsFilter::default())
            .await?;

        Ok(compute_overview(&items, Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::food_item::entities::{FoodItemConfig, Unit};
    use chrono::{Duration, TimeZone};
    use uuid::Uuid;

    fn item(category: Category, days: i64, now: DateTime<Utc>) -> FoodItem {
        FoodItem::new(FoodItemConfig {
            user_id: Uuid::new_v4(),
            name: format!("{category} item"),
            quantity: 1.0,
            unit: Unit::Pieces,
            category,
            expiration: now + Duration::days(days),
        })
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_inventory_overview() {
        let overview = compute_overview(&[], now());
        assert_eq!(overview.total_items, 0);
        assert_eq!(overview.expired_items, 0);
        assert_eq!(overview.average_days_to_expiration, 0.0);
        assert_eq!(overview.most_common_category, None);
        assert!(overview.categories.is_empty());
        assert_eq!(overview.diversity_label, DiversityLabel::Low);
        assert_eq!(
            overview.suggestion,
            "Consider adding more dairy items for a balanced fridge!"
        );
    }

    #[test]
    fn test_category_breakdown_and_percentages() {
        let now = now();
        let items = vec![
            item(Category::Dairy, 3, now),
            item(Category::Dairy, 5, now),
            item(Category::Fruits, 2, now),
        ];

        let overview = compute_overview(&items, now);
        assert_eq!(overview.categories.len(), 2);
        assert_eq!(overview.categories[0].category, Category::Dairy);
        assert_eq!(overview.categories[0].percentage, 67);
        assert_eq!(overview.categories[1].percentage, 33);
        assert_eq!(overview.most_common_category, Some(Category::Dairy));
    }

    #[test]
    fn test_expired_and_average_days() {
        let now = now();
        let items = vec![
            item(Category::Meat, -3, now),
            item(Category::Meat, 2, now),
            item(Category::Meat, 4, now),
        ];

        let overview = compute_overview(&items, now);
        assert_eq!(overview.expired_items, 1);
        assert_eq!(overview.average_days_to_expiration, 3.0);
    }

    #[test]
    fn test_diversity_score_and_labels() {
        let now = now();

        let two = vec![item(Category::Dairy, 1, now), item(Category::Meat, 1, now)];
        let overview = compute_overview(&two, now);
        assert_eq!(overview.diversity_score, 0.25);
        assert_eq!(overview.diversity_label, DiversityLabel::Low);

        let all: Vec<FoodItem> = Category::ALL.iter().map(|c| item(*c, 1, now)).collect();
        let overview = compute_overview(&all, now);
        assert_eq!(overview.diversity_score, 1.0);
        assert_eq!(overview.diversity_label, DiversityLabel::Excellent);
        assert_eq!(overview.suggestion, "Your fridge is well balanced!");
    }

    #[test]
    fn test_suggestion_names_first_missing_category() {
        let now = now();
        let items = vec![item(Category::Dairy, 1, now), item(Category::Meat, 1, now)];
        let overview = compute_overview(&items, now);
        assert_eq!(
            overview.suggestion,
            "Consider adding more vegetable items for a balanced fridge!"
        );
    }
}
