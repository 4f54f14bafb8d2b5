// Path factories configured with a placeholder marker

use tracing::debug;

use crate::config::PathInstanceConfig;
use crate::error::{PathError, Result};

use super::assembler::Assembler;
use super::param::Param;
use super::parser::TemplateParser;
use super::value::PathValue;

/// Marker used by the default instance (`/users/:id`)
pub const DEFAULT_PARAM_PREFIX: &str = ":";

/// Defines paths, rendering placeholders with a fixed prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathInstance {
    param_prefix: String,
}

impl PathInstance {
    pub fn new(config: PathInstanceConfig) -> Self {
        Self {
            param_prefix: config.param_prefix,
        }
    }

    pub fn with_prefix(param_prefix: impl Into<String>) -> Self {
        Self {
            param_prefix: param_prefix.into(),
        }
    }

    pub fn param_prefix(&self) -> &str {
        &self.param_prefix
    }

    /// Define a path from literal segments and the parameters between them.
    ///
    /// There must be exactly one more segment than parameters; use empty strings
    /// for a path that starts or ends with a parameter.
    pub fn build(&self, segments: Vec<String>, params: Vec<Param>) -> Result<PathValue> {
        if segments.len() != params.len() + 1 {
            return Err(PathError::InvalidTemplate {
                segments: segments.len(),
                params: params.len(),
            });
        }

        let stringified = Assembler::new(&segments, &params).canonical(&self.param_prefix);
        debug!(path = %stringified, params = params.len(), "defined path");

        Ok(PathValue::new(stringified, segments, params))
    }

    /// Define a path from a `{name}` template string
    pub fn parse(&self, template: &str) -> Result<PathValue> {
        let (segments, params) = TemplateParser::parse(template)?;
        self.build(segments, params)
    }
}

impl Default for PathInstance {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_PARAM_PREFIX)
    }
}

/// Create a path instance from its configuration
pub fn configure(config: PathInstanceConfig) -> PathInstance {
    PathInstance::new(config)
}

/// Define a path with the default `:` prefix
pub fn path(template: &str) -> Result<PathValue> {
    PathInstance::default().parse(template)
}
