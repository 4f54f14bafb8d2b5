use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::{PathInstance, DEFAULT_PARAM_PREFIX};

fn default_param_prefix() -> String {
    DEFAULT_PARAM_PREFIX.to_string()
}

/// Options for a [`PathInstance`]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PathInstanceConfig {
    #[serde(default = "default_param_prefix")]
    pub param_prefix: String,
}

impl Default for PathInstanceConfig {
    fn default() -> Self {
        Self {
            param_prefix: default_param_prefix(),
        }
    }
}

/// One named route in a routes file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RouteSettings {
    pub name: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A routes file: an optional prefix plus the routes defined with it
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RoutesFile {
    #[serde(default = "default_param_prefix")]
    pub param_prefix: String,
    #[serde(default)]
    pub routes: Vec<RouteSettings>,
}

impl RoutesFile {
    pub fn from_yaml_str(yml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yml)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let yml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yml)
    }

    pub fn instance_config(&self) -> PathInstanceConfig {
        PathInstanceConfig {
            param_prefix: self.param_prefix.clone(),
        }
    }

    pub fn instance(&self) -> PathInstance {
        PathInstance::new(self.instance_config())
    }
}
