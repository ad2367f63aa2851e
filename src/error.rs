use thiserror::Error;

/// Unified error type for git-buildver operations
#[derive(Error, Debug)]
pub enum BuildVerError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Describe failed: {0}")]
    Describe(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Cannot render TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Convenience type alias for Results in git-buildver
pub type Result<T> = std::result::Result<T, BuildVerError>;

impl BuildVerError {
    /// Create a describe error with context
    pub fn describe(msg: impl Into<String>) -> Self {
        BuildVerError::Describe(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BuildVerError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BuildVerError::config("missing fallback");
        assert_eq!(err.to_string(), "Configuration error: missing fallback");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BuildVerError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_git2() {
        let err: BuildVerError = git2::Error::from_str("object not found").into();
        assert!(err.to_string().starts_with("Git operation failed"));
        assert!(err.to_string().contains("object not found"));
    }

    #[test]
    fn test_error_from_toml() {
        let parse_err = toml::from_str::<toml::Value>("key = ").unwrap_err();
        let err: BuildVerError = parse_err.into();
        assert!(err.to_string().starts_with("Invalid TOML"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (BuildVerError::describe("x"), "Describe failed"),
            (BuildVerError::config("x"), "Configuration error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
