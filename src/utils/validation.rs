use crate::utils::error::{DemoError, Result};
use url::Url;

pub const SUPPORTED_SCHEMES: &[&str] = &["mysql", "mariadb"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 把連線字串中的帳密換成 `***`，供日誌與錯誤訊息使用
pub fn redact_url(url_str: &str) -> String {
    match Url::parse(url_str) {
        Ok(mut url) if !url.username().is_empty() || url.password().is_some() => {
            if url.set_username("***").is_ok() && url.set_password(None).is_ok() {
                url.to_string()
            } else {
                redact_userinfo(url_str)
            }
        }
        Ok(_) => url_str.to_string(),
        Err(_) => redact_userinfo(url_str),
    }
}

fn redact_userinfo(url_str: &str) -> String {
    match (url_str.find("://"), url_str.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}***{}", &url_str[..scheme_end + 3], &url_str[at..])
        }
        _ => url_str.to_string(),
    }
}

/// 驗證資料庫連線字串，形式為 protocol://host:port/database
pub fn validate_database_url(field_name: &str, url_str: &str) -> Result<()> {
    let shown = redact_url(url_str);
    if url_str.is_empty() {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: shown.clone(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    // sqlite::memory: 與 sqlite:path 不是合法的階層式 URL，只檢查前綴
    if url_str.starts_with("sqlite:") {
        return Ok(());
    }

    match Url::parse(url_str) {
        Ok(url) => {
            if !SUPPORTED_SCHEMES.contains(&url.scheme()) {
                return Err(DemoError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: shown.clone(),
                    reason: format!(
                        "Unsupported URL scheme: {}. Supported schemes: {}",
                        url.scheme(),
                        SUPPORTED_SCHEMES.join(", ")
                    ),
                });
            }
            if url.host_str().map_or(true, str::is_empty) {
                return Err(DemoError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: shown.clone(),
                    reason: "URL has no host".to_string(),
                });
            }
            Ok(())
        }
        Err(e) => Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: shown.clone(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
