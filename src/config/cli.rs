use crate::config::toml_config::TomlConfig;
use crate::config::DatabaseConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

/// Command line for the database demo. Flags override the config file, which overrides defaults.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "pattern-demos")]
#[command(about = "Singleton database connection demo: update one student, then list them all")]
pub struct CliArgs {
    /// Path to a TOML file with a [database] table
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Connection string, protocol://host:port/database
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    #[arg(long, env = "DATABASE_USER")]
    pub username: Option<String>,

    #[arg(long, env = "DATABASE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// 合併預設值、設定檔與命令列參數，並驗證結果
    pub fn resolve(&self) -> Result<DatabaseConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)?.database
            }
            None => DatabaseConfig::default(),
        };

        if let Some(url) = &self.database_url {
            config.url = url.clone();
        }
        if let Some(username) = &self.username {
            config.username = username.clone();
        }
        if let Some(password) = &self.password {
            config.password = password.clone();
        }

        config.validate()?;
        tracing::debug!("Resolved database config: {:?}", config);
        Ok(config)
    }
}
