//! Process configuration, read once from the environment at startup.

use crate::error::LoadError;
use std::path::PathBuf;

pub const DEFAULT_PETS_DATA_FILE: &str = "assets/data/pets.json";
pub const DEFAULT_PRICE_API_BASE_URL: &str = "https://prices.runescape.wiki/api/v1/osrs";

#[derive(Debug, Clone)]
pub struct Config {
    /// Bot token used to log into the gateway.
    pub discord_token: String,
    /// Application id the global slash commands are registered under.
    pub application_id: u64,
    /// SQLite file holding registrations and obtained pets. Created if missing.
    pub db_file: PathBuf,
    pub pets_data_file: PathBuf,
    pub price_api_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, LoadError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests need not touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(LoadError::MissingVar(name))
        };

        let discord_token = required("DISCORD_TOKEN")?;
        let raw_app_id = required("DISCORD_CLIENT_ID")?;
        let application_id = raw_app_id
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|id| *id != 0)
            .ok_or(LoadError::InvalidVar {
                name: "DISCORD_CLIENT_ID",
                value: raw_app_id.clone(),
            })?;
        let db_file = PathBuf::from(required("DB_FILE_NAME")?);
        let pets_data_file = lookup("PETS_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PETS_DATA_FILE));
        let price_api_base_url = lookup("PRICE_API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_PRICE_API_BASE_URL.to_string());

        Ok(Self {
            discord_token,
            application_id,
            db_file,
            pets_data_file,
            price_api_base_url,
        })
    }
}
