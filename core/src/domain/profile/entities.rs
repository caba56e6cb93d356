use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationFrequency {
    #[default]
    None,
    Every12Hours,
    Every24Hours,
    Weekly,
}

impl NotificationFrequency {
    pub fn interval_hours(&self) -> i32 {
        match self {
            NotificationFrequency::None => 0,
            NotificationFrequency::Every12Hours => 12,
            NotificationFrequency::Every24Hours => 24,
            NotificationFrequency::Weekly => 24 * 7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationFrequency::None => "none",
            NotificationFrequency::Every12Hours => "every_12_hours",
            NotificationFrequency::Every24Hours => "every_24_hours",
            NotificationFrequency::Weekly => "weekly",
        }
    }
}

impl FromStr for NotificationFrequency {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(NotificationFrequency::None),
            "every_12_hours" => Ok(NotificationFrequency::Every12Hours),
            "every_24_hours" => Ok(NotificationFrequency::Every24Hours),
            "weekly" => Ok(NotificationFrequency::Weekly),
            _ => Err(()),
        }
    }
}

impl From<&str> for NotificationFrequency {
    fn from(s: &str) -> Self {
        NotificationFrequency::from_str(s).unwrap_or_default()
    }
}

/// One profile document per auth user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub notification_frequency: NotificationFrequency,
    pub push_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(user_id: Uuid, email: Option<String>) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            user_id,
            nickname: None,
            email,
            notification_frequency: NotificationFrequency::default(),
            push_token: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_hours() {
        assert_eq!(NotificationFrequency::None.interval_hours(), 0);
        assert_eq!(NotificationFrequency::Every12Hours.interval_hours(), 12);
        assert_eq!(NotificationFrequency::Every24Hours.interval_hours(), 24);
        assert_eq!(NotificationFrequency::Weekly.interval_hours(), 168);
    }

    #[test]
    fn test_unknown_stored_frequency_falls_back_to_none() {
        assert_eq!(
            NotificationFrequency::from("every_48_hours"),
            NotificationFrequency::None
        );
    }
}
