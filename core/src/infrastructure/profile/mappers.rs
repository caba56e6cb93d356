use crate::{domain::profile::entities::UserProfile, entity::user_profiles};

impl From<&user_profiles::Model> for UserProfile {
    fn from(model: &user_profiles::Model) -> Self {
        Self {
            user_id: model.user_id,
            nickname: model.nickname.clone(),
            email: model.email.clone(),
            notification_frequency: model.notification_frequency.as_str().into(),
            push_token: model.push_token.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<user_profiles::Model> for UserProfile {
    fn from(model: user_profiles::Model) -> Self {
        Self::from(&model)
    }
}
