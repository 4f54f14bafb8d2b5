// Error handling for path-def

use std::fmt;

/// Library error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Literal segments and parameters don't interleave (segments must be params + 1)
    InvalidTemplate { segments: usize, params: usize },
    Parse { message: String, position: usize },
    DuplicateRoute(String),
    Config(String),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InvalidTemplate { segments, params } => write!(
                f,
                "Invalid template: {} literal segments cannot surround {} parameters (expected {})",
                segments,
                params,
                params + 1
            ),
            PathError::Parse { message, position } => {
                write!(f, "Template parse error at position {}: {}", position, message)
            }
            PathError::DuplicateRoute(name) => write!(f, "Duplicate route: {}", name),
            PathError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for PathError {}

impl From<serde_yaml::Error> for PathError {
    fn from(err: serde_yaml::Error) -> Self {
        PathError::Config(err.to_string())
    }
}

impl From<std::io::Error> for PathError {
    fn from(err: std::io::Error) -> Self {
        PathError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_template_message() {
        let err = PathError::InvalidTemplate {
            segments: 2,
            params: 2,
        };
        assert_eq!(
            err.to_string(),
            "Invalid template: 2 literal segments cannot surround 2 parameters (expected 3)"
        );
    }

    #[test]
    fn test_parse_message_includes_position() {
        let err = PathError::Parse {
            message: "Unexpected closing brace".to_string(),
            position: 4,
        };
        assert!(err.to_string().contains("position 4"));
    }

    #[test]
    fn test_yaml_error_converts_to_config() {
        let yaml_err = serde_yaml::from_str::<Vec<String>>("{").unwrap_err();
        let err: PathError = yaml_err.into();
        assert!(matches!(err, PathError::Config(_)));
    }
}
