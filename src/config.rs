// src/config.rs
use crate::application::commands::articles::UpdateMode;
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    update_mode: UpdateMode,
    flash_ttl: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://articles.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_flash_ttl() -> u64 {
    300
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let update_mode = match lookup("ARTICLE_UPDATE_MODE") {
            Some(raw) => raw.parse::<UpdateMode>().map_err(ConfigError::Invalid)?,
            None => UpdateMode::default(),
        };

        let flash_ttl_secs = match lookup("FLASH_TTL_SECONDS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::Invalid(format!(
                    "FLASH_TTL_SECONDS must be a whole number of seconds, got `{raw}`"
                ))
            })?,
            None => default_flash_ttl(),
        };

        if flash_ttl_secs == 0 {
            return Err(ConfigError::Invalid(
                "FLASH_TTL_SECONDS must be greater than zero".into(),
            ));
        }

        Ok(Self {
            database_url,
            listen_addr,
            update_mode,
            flash_ttl: Duration::from_secs(flash_ttl_secs),
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn update_mode(&self) -> UpdateMode {
        self.update_mode
    }

    /// How long an unread flash message survives.
    pub fn flash_ttl(&self) -> Duration {
        self.flash_ttl
    }
}
