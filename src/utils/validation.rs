use crate::utils::error::{OverrideError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Snapshot, output and report paths must name a file, not a directory.
pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    let invalid = |reason: &str| {
        Err(OverrideError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: reason.to_string(),
        })
    };

    if path.trim().is_empty() {
        return invalid("Path cannot be empty");
    }
    if path.contains('\0') {
        return invalid("Path contains null bytes");
    }
    if path.ends_with('/') || path.ends_with(std::path::MAIN_SEPARATOR) {
        return invalid("Path must name a file, not a directory");
    }
    if matches!(
        std::path::Path::new(path).file_name().and_then(|n| n.to_str()),
        None | Some(".") | Some("..")
    ) {
        return invalid("Path has no file name");
    }

    Ok(())
}

pub fn validate_non_empty_list(field_name: &str, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Err(OverrideError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(OverrideError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected one of: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// Legal names: `[A-Za-z0-9_.\-@:]`, no leading/trailing '.', no "..".
pub fn validate_property_name(name: &str) -> Result<()> {
    let illegal = |reason: &str| {
        Err(OverrideError::IllegalPropertyName {
            name: name.to_string(),
            reason: reason.to_string(),
        })
    };

    if name.is_empty() {
        return illegal("name cannot be empty");
    }
    if name.starts_with('.') || name.ends_with('.') {
        return illegal("name cannot start or end with '.'");
    }
    if name.contains("..") {
        return illegal("name cannot contain '..'");
    }
    if let Some(c) = name
        .chars()
        .find(|&c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-' | '@' | ':')))
    {
        return illegal(&format!("illegal character {:?}", c));
    }

    Ok(())
}
