use crate::domain::model::ModalOptionsPatch;
use crate::utils::error::{ModalError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ModalError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(ModalError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected one of: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// Size descriptors are opaque to the facade but must be something a host can
/// interpret: a string (e.g. a class list) or an object (e.g. width/height).
pub fn validate_dimensions(field_name: &str, value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::String(s) => validate_non_empty_string(field_name, s),
        serde_json::Value::Object(_) => Ok(()),
        other => Err(ModalError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: other.to_string(),
            reason: "Dimensions must be a string or a table".to_string(),
        }),
    }
}

impl Validate for ModalOptionsPatch {
    fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            validate_non_empty_string("title", title)?;
        }
        if let Some(class_name) = &self.custom_class_name {
            validate_non_empty_string("custom_class_name", class_name)?;
        }
        if let Some(dimensions) = &self.container_dimensions {
            validate_dimensions("container_dimensions", dimensions)?;
        }
        if let Some(dimensions) = &self.content_dimensions {
            validate_dimensions("content_dimensions", dimensions)?;
        }
        Ok(())
    }
}
