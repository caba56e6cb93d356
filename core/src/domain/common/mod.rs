use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod policies;
pub mod services;

#[derive(Clone, Debug)]
pub struct VirtualFridgeConfig {
    pub database: DatabaseConfig,
    pub llm: LlmConfig,
    pub media: MediaConfig,
    pub identity_provider: IdentityProviderConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub openai_api_key: String,
    pub openai_model: String,
}

#[derive(Clone, Debug)]
pub struct MediaConfig {
    pub pexels_api_key: String,
    pub youtube_api_key: String,
    pub image_cache_capacity: usize,
}

#[derive(Clone, Debug)]
pub struct IdentityProviderConfig {
    pub firebase_api_key: String,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
