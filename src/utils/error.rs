use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML rendering error: {0}")]
    TomlError(#[from] toml::ser::Error),

    #[error("Env file error: {message}")]
    EnvFileError { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ConfigError::IoError(e) => format!("Could not read or write a file: {}", e),
            ConfigError::SerializationError(_) | ConfigError::TomlError(_) => {
                "Could not render the generated configuration".to_string()
            }
            ConfigError::EnvFileError { message } => {
                format!("Could not load env file: {}", message)
            }
            ConfigError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConfigError::IoError(_) => "Check that the output path exists and is writable",
            ConfigError::SerializationError(_) | ConfigError::TomlError(_) => {
                "Try rendering with --format json"
            }
            ConfigError::EnvFileError { .. } => {
                "Check the env file path and its KEY=value syntax"
            }
            ConfigError::InvalidConfigValueError { .. } => {
                "Fix the value in App Service application settings or run without --strict"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
