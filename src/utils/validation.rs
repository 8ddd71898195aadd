use crate::utils::error::{AuditError, Result};

/// 802.11 caps an SSID at 32 octets.
pub const MAX_SSID_BYTES: usize = 32;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_ssid(field_name: &str, ssid: &str) -> Result<()> {
    if ssid.is_empty() {
        return Err(AuditError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: ssid.to_string(),
            reason: "SSID cannot be empty".to_string(),
        });
    }

    if ssid.len() > MAX_SSID_BYTES {
        return Err(AuditError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: ssid.to_string(),
            reason: format!("SSID is longer than {} bytes", MAX_SSID_BYTES),
        });
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AuditError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AuditError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AuditError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(AuditError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
