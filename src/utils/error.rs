use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverrideError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Property '{name}' is read-only")]
    ReadOnlyProperty { name: String },

    #[error("Property '{name}' already exists")]
    DuplicateProperty { name: String },

    #[error("Illegal property name '{name}': {reason}")]
    IllegalPropertyName { name: String, reason: String },

    #[error("Value for '{name}' is too long ({len} bytes)")]
    ValueTooLong { name: String, len: usize },

    #[error("Stale property handle: {handle}")]
    StaleHandle { handle: usize },

    #[error("{path}:{line}: {message}")]
    ParseError {
        path: String,
        line: usize,
        message: String,
    },
}

impl OverrideError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            OverrideError::IoError(_) => "Check that the snapshot and output paths exist and are accessible",
            OverrideError::SerializationError(_) => "Check that the report path is writable",
            OverrideError::ConfigError { .. }
            | OverrideError::ConfigValidationError { .. }
            | OverrideError::InvalidConfigValueError { .. }
            | OverrideError::MissingConfigError { .. } => {
                "Review the configuration file and command line flags"
            }
            OverrideError::ParseError { .. } => "Fix the offending line in the build.prop snapshot",
            OverrideError::ReadOnlyProperty { .. } => "Use force_set to override read-only properties",
            OverrideError::DuplicateProperty { .. }
            | OverrideError::IllegalPropertyName { .. }
            | OverrideError::ValueTooLong { .. }
            | OverrideError::StaleHandle { .. } => "Check the property name and value being written",
        }
    }

    /// 對應 harness 的結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            OverrideError::ConfigError { .. }
            | OverrideError::ConfigValidationError { .. }
            | OverrideError::InvalidConfigValueError { .. }
            | OverrideError::MissingConfigError { .. } => 2,
            OverrideError::IoError(_) | OverrideError::ParseError { .. } => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, OverrideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        let config = OverrideError::MissingConfigError {
            field: "store.props".to_string(),
        };
        assert_eq!(config.exit_code(), 2);

        let parse = OverrideError::ParseError {
            path: "build.prop".to_string(),
            line: 3,
            message: "missing '='".to_string(),
        };
        assert_eq!(parse.exit_code(), 3);
        assert_eq!(parse.to_string(), "build.prop:3: missing '='");

        let ro = OverrideError::ReadOnlyProperty {
            name: "ro.product.model".to_string(),
        };
        assert_eq!(ro.exit_code(), 1);
        assert!(ro.recovery_suggestion().contains("force_set"));
    }
}
