//! Field normalization applied before every write.
use crate::errors::ModelError;

/// Trimmed text; blank input is rejected.
pub fn required_text(field: &str, value: &str) -> Result<String, ModelError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    Ok(trimmed.to_string())
}

/// Trimmed text; blank input becomes `None`.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

pub fn ticker(value: &str) -> Result<String, ModelError> {
    required_text("ticker", value).map(|t| t.to_uppercase())
}
