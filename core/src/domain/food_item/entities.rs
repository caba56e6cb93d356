use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// Controlled vocabulary for item quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Pieces,
    Kg,
    Lbs,
    Liters,
    Ml,
    Oz,
    Pt,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Pieces => "pieces",
            Unit::Kg => "kg",
            Unit::Lbs => "lbs",
            Unit::Liters => "liters",
            Unit::Ml => "ml",
            Unit::Oz => "oz",
            Unit::Pt => "pt",
        }
    }
}

impl FromStr for Unit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pieces" => Ok(Unit::Pieces),
            "kg" => Ok(Unit::Kg),
            "lbs" => Ok(Unit::Lbs),
            "liters" => Ok(Unit::Liters),
            "ml" => Ok(Unit::Ml),
            "oz" => Ok(Unit::Oz),
            "pt" => Ok(Unit::Pt),
            _ => Err(()),
        }
    }
}

// Lenient mapping for values read back from storage.
impl From<&str> for Unit {
    fn from(s: &str) -> Self {
        Unit::from_str(s).unwrap_or(Unit::Pieces)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Controlled vocabulary for food categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Category {
    Dairy,
    Meat,
    Vegetable,
    Fruits,
    Grains,
    Beverage,
    Seafood,
    Other,
}

impl Category {
    /// Canonical order, used for analytics breakdowns and suggestions.
    pub const ALL: [Category; 8] = [
        Category::Dairy,
        Category::Meat,
        Category::Vegetable,
        Category::Fruits,
        Category::Grains,
        Category::Beverage,
        Category::Seafood,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Dairy => "Dairy",
            Category::Meat => "Meat",
            Category::Vegetable => "Vegetable",
            Category::Fruits => "Fruits",
            Category::Grains => "Grains",
            Category::Beverage => "Beverage",
            Category::Seafood => "Seafood",
            Category::Other => "Other",
        }
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dairy" => Ok(Category::Dairy),
            "meat" => Ok(Category::Meat),
            "vegetable" => Ok(Category::Vegetable),
            "fruits" => Ok(Category::Fruits),
            "grains" => Ok(Category::Grains),
            "beverage" => Ok(Category::Beverage),
            "seafood" => Ok(Category::Seafood),
            "other" => Ok(Category::Other),
            _ => Err(()),
        }
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Category::from_str(s).unwrap_or(Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub category: Category,
    pub expiration: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct FoodItemConfig {
    pub user_id: Uuid,
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub category: Category,
    pub expiration: DateTime<Utc>,
}

impl FoodItem {
    pub fn new(config: FoodItemConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            name: config.name,
            quantity: config.quantity,
            unit: config.unit,
            category: config.category,
            expiration: config.expiration,
            created_at: now,
            updated_at: now,
        }
    }

    /// Calendar-day distance to the expiration date. An item expiring later
    /// today reports 0, yesterday -1.
    pub fn days_until_expiration(&self, from: DateTime<Utc>) -> i64 {
        (self.expiration.date_naive() - from.date_naive()).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item_expiring_at(expiration: DateTime<Utc>) -> FoodItem {
        FoodItem::new(FoodItemConfig {
            user_id: Uuid::new_v4(),
            name: "Milk".to_string(),
            quantity: 1.0,
            unit: Unit::Liters,
            category: Category::Dairy,
            expiration,
        })
    }

    #[test]
    fn test_days_until_expiration_is_calendar_based() {
        let now = Utc.with_ymd_and_hms(2025, 6, 10, 23, 0, 0).unwrap();
        // Expires one hour later, but on the next calendar day.
        let item = item_expiring_at(Utc.with_ymd_and_hms(2025, 6, 11, 0, 0, 0).unwrap());
        assert_eq!(item.days_until_expiration(now), 1);
    }

    #[test]
    fn test_days_until_expiration_same_day_is_zero() {
        let now = Utc.with_ymd_and_hms(2025, 6, 10, 8, 0, 0).unwrap();
        let item = item_expiring_at(Utc.with_ymd_and_hms(2025, 6, 10, 22, 0, 0).unwrap());
        assert_eq!(item.days_until_expiration(now), 0);
    }

    #[test]
    fn test_days_until_expiration_negative_when_expired() {
        let now = Utc.with_ymd_and_hms(2025, 6, 10, 8, 0, 0).unwrap();
        let item = item_expiring_at(Utc.with_ymd_and_hms(2025, 6, 8, 12, 0, 0).unwrap());
        assert_eq!(item.days_until_expiration(now), -2);
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("FRUITS".parse::<Category>(), Ok(Category::Fruits));
        assert_eq!("seafood".parse::<Category>(), Ok(Category::Seafood));
        assert!("snacks".parse::<Category>().is_err());
    }

    #[test]
    fn test_unknown_stored_values_fall_back() {
        assert_eq!(Unit::from("bottles"), Unit::Pieces);
        assert_eq!(Category::from("Snacks"), Category::Other);
    }
}
