use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModalError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Service not registered: {name}")]
    ServiceNotFound { name: String },

    #[error("Service name already registered: {name}")]
    DuplicateService { name: String },

    #[error("Service '{name}' is not a {expected}")]
    ServiceTypeMismatch { name: String, expected: &'static str },
}

impl ModalError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ModalError::IoError(_) => "Check that the file exists and is readable",
            ModalError::TomlError(_) => "Fix the TOML syntax in the configuration file",
            ModalError::SerializationError(_) => "Check the JSON values passed as content props",
            ModalError::ConfigError { .. } | ModalError::InvalidConfigValueError { .. } => {
                "Correct the configuration value and try again"
            }
            ModalError::ServiceNotFound { .. } => {
                "Register the service with ServicesManager::register before looking it up"
            }
            ModalError::DuplicateService { .. } => {
                "Each service name and alternate name can only be registered once"
            }
            ModalError::ServiceTypeMismatch { .. } => {
                "Request the service with the type it was registered as"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ModalError::IoError(e) => format!("Could not read a file: {}", e),
            ModalError::TomlError(_) | ModalError::ConfigError { .. } => {
                format!("The configuration could not be loaded: {}", self)
            }
            ModalError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModalError>;
