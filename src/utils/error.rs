use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Database connection is not open")]
    NotConnected,

    #[error("No payment strategy selected")]
    MissingPaymentStrategy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DemoError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DemoError::MissingPaymentStrategy => ErrorSeverity::Low,
            DemoError::NotConnected | DemoError::DatabaseError(_) => ErrorSeverity::Medium,
            DemoError::InvalidConfigValueError { .. } | DemoError::TomlError(_) => {
                ErrorSeverity::High
            }
            DemoError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::DatabaseError(_) | DemoError::NotConnected => {
                "Could not talk to the database".to_string()
            }
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            DemoError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            DemoError::IoError(e) => format!("File system error: {}", e),
            DemoError::MissingPaymentStrategy => {
                "Choose a payment method before checking out".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::DatabaseError(_) | DemoError::NotConnected => {
                "Check that the database server is running and the credentials are correct"
            }
            DemoError::InvalidConfigValueError { .. } => {
                "Fix the value on the command line or in the config file"
            }
            DemoError::TomlError(_) => "Check the [database] table of the config file",
            DemoError::IoError(_) => "Make sure the file exists and is readable",
            DemoError::MissingPaymentStrategy => "Call set_payment_strategy before checkout",
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
