pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{
    redact_url, validate_database_url, validate_non_empty_string, Validate,
};
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_DATABASE_URL: &str = "mysql://localhost:3306/qlsv";
pub const DEFAULT_USERNAME: &str = "root";

/// Connection settings for [`crate::adapters::database::DatabaseConnection`].
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub username: String,
    pub password: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            password: String::new(),
        }
    }
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn is_sqlite(&self) -> bool {
        self.url.starts_with("sqlite:")
    }

    /// 連線字串，帳密已遮蔽
    pub fn redacted_url(&self) -> String {
        redact_url(&self.url)
    }

    pub fn url_has_username(&self) -> bool {
        Url::parse(&self.url).is_ok_and(|url| !url.username().is_empty())
    }

    pub fn url_has_password(&self) -> bool {
        Url::parse(&self.url).is_ok_and(|url| url.password().is_some())
    }
}

// 密碼不進日誌
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.redacted_url())
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<()> {
        validate_database_url("database.url", &self.url)?;
        if !self.is_sqlite() && !self.url_has_username() {
            validate_non_empty_string("database.username", &self.username)?;
        }
        Ok(())
    }
}
