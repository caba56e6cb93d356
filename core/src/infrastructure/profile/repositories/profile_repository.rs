use sea_orm::{
    ActiveValue::Set,
    DatabaseConnection, EntityTrait,
    sea_query::OnConflict,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        profile::{entities::UserProfile, ports::ProfileRepository},
    },
    entity::user_profiles::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresProfileRepository {
    pub db: DatabaseConnection,
}

impl PostgresProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ProfileRepository for PostgresProfileRepository {
    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Option<UserProfile>, CoreError> {
        let profile = Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user profile: {}", e);
                CoreError::InternalServerError
            })?
            .map(UserProfile::from);

        Ok(profile)
    }

    async fn upsert(&self, profile: UserProfile) -> Result<UserProfile, CoreError> {
        let active_model = ActiveModel {
            user_id: Set(profile.user_id),
            nickname: Set(profile.nickname.clone()),
            email: Set(profile.email.clone()),
            notification_frequency: Set(profile.notification_frequency.as_str().to_string()),
            interval_hours: Set(profile.notification_frequency.interval_hours()),
            push_token: Set(profile.push_token.clone()),
            created_at: Set(profile.created_at.fixed_offset()),
            updated_at: Set(profile.updated_at.fixed_offset()),
        };

        let saved = Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(Column::UserId)
                    .update_columns([
                        Column::Nickname,
                        Column::Email,
                        Column::NotificationFrequency,
                        Column::IntervalHours,
                        Column::PushToken,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert user profile: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(UserProfile::from(saved))
    }

    async fn delete(&self, user_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_by_id(user_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete user profile: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
