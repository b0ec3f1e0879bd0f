use serde::Deserialize;
use service_core::config as core_config;
use service_core::config::{is_prod, require_env};
use service_core::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct TankConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    pub allowed_origins: Vec<String>,
}

impl TankConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and AQUARIUM__ prefix)
        let common_config = core_config::Config::load()?;

        let is_prod = is_prod();

        Ok(TankConfig {
            common: common_config,
            mongodb: MongoConfig {
                uri: require_env("MONGODB_URI", None, is_prod)?,
                database: require_env("MONGODB_DATABASE", Some("aquarium_db"), is_prod)?,
            },
            security: SecurityConfig {
                allowed_origins: require_env(
                    "ALLOWED_ORIGINS",
                    Some("http://localhost:3000"),
                    is_prod,
                )?
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            },
        })
    }
}
