use clap::Parser;
use virtualfridge_core::domain::common::{
    DatabaseConfig, IdentityProviderConfig, LlmConfig, MediaConfig, VirtualFridgeConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "virtualfridge-api", about = "VirtualFridge HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub media: MediaArgs,

    #[command(flatten)]
    pub identity: IdentityArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "APP_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "APP_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Prefix every route with this path, e.g. "/api/v1".
    #[arg(long, env = "APP_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(long, env = "APP_ALLOWED_ORIGINS", value_delimiter = ',', default_value = "http://localhost:3000")]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub json_logs: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long, env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "virtualfridge")]
    pub username: String,

    #[arg(long, env = "DATABASE_PASSWORD", default_value = "virtualfridge")]
    pub password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "virtualfridge")]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "OPENAI_API_KEY", default_value = "")]
    pub openai_api_key: String,

    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o")]
    pub openai_model: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct MediaArgs {
    #[arg(long, env = "PEXELS_API_KEY", default_value = "")]
    pub pexels_api_key: String,

    #[arg(long, env = "YOUTUBE_API_KEY", default_value = "")]
    pub youtube_api_key: String,

    #[arg(long, env = "IMAGE_CACHE_CAPACITY", default_value_t = 256)]
    pub image_cache_capacity: usize,
}

#[derive(Debug, Clone, clap::Args)]
pub struct IdentityArgs {
    #[arg(long, env = "FIREBASE_API_KEY", default_value = "")]
    pub firebase_api_key: String,
}

impl From<Args> for VirtualFridgeConfig {
    fn from(args: Args) -> Self {
        VirtualFridgeConfig {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.username,
                password: args.database.password,
                name: args.database.name,
            },
            llm: LlmConfig {
                openai_api_key: args.llm.openai_api_key,
                openai_model: args.llm.openai_model,
            },
            media: MediaConfig {
                pexels_api_key: args.media.pexels_api_key,
                youtube_api_key: args.media.youtube_api_key,
                image_cache_capacity: args.media.image_cache_capacity,
            },
            identity_provider: IdentityProviderConfig {
                firebase_api_key: args.identity.firebase_api_key,
            },
        }
    }
}
