use crate::config::DatabaseConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Optional config file, e.g.
///
/// ```toml
/// [database]
/// url = "mysql://localhost:3306/qlsv"
/// username = "root"
/// password = "${DATABASE_PASSWORD}"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${DATABASE_PASSWORD})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let re = PATTERN.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.database.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_database_table() {
        let config = TomlConfig::from_toml_str(
            r#"
[database]
url = "mysql://db.internal:3307/qlsv"
username = "app"
password = "secret"
"#,
        )
        .unwrap();

        assert_eq!(config.database.url, "mysql://db.internal:3307/qlsv");
        assert_eq!(config.database.username, "app");
        assert_eq!(config.database.password, "secret");
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config = TomlConfig::from_toml_str("[database]\nusername = \"app\"\n").unwrap();
        assert_eq!(config.database.url, "mysql://localhost:3306/qlsv");
        assert_eq!(config.database.username, "app");

        let empty = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(empty.database, DatabaseConfig::default());
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("PATTERN_DEMOS_TEST_DB_PASSWORD", "from-env");
        let config = TomlConfig::from_toml_str(
            "[database]\npassword = \"${PATTERN_DEMOS_TEST_DB_PASSWORD}\"\n",
        )
        .unwrap();
        assert_eq!(config.database.password, "from-env");

        let untouched = TomlConfig::from_toml_str(
            "[database]\npassword = \"${PATTERN_DEMOS_SURELY_UNSET_VAR}\"\n",
        )
        .unwrap();
        assert_eq!(
            untouched.database.password,
            "${PATTERN_DEMOS_SURELY_UNSET_VAR}"
        );
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(TomlConfig::from_toml_str("[database\nurl = ").is_err());
    }
}
