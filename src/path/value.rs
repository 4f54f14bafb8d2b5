// The immutable result of defining a path template

use std::fmt;

use serde::{Deserialize, Serialize};

use super::assembler::Assembler;
use super::param::{Param, ParamValues};

/// A defined path: its canonical string plus everything needed to build it again
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathValue {
    stringified: String,
    segments: Vec<String>,
    params: Vec<Param>,
}

impl PathValue {
    /// Only constructed through [`PathInstance`](super::PathInstance), which checks the
    /// segment/param invariant and renders `stringified` up front.
    pub(crate) fn new(stringified: String, segments: Vec<String>, params: Vec<Param>) -> Self {
        Self {
            stringified,
            segments,
            params,
        }
    }

    /// The template with every placeholder shown as `<prefix><key>`
    pub fn stringified(&self) -> &str {
        &self.stringified
    }

    /// Substitute `values` into the template.
    ///
    /// Values are inserted verbatim. A key that is missing from `values` (or maps to
    /// `None`) contributes nothing, so the literal text on either side of it becomes
    /// adjacent.
    pub fn build<V>(&self, values: &V) -> String
    where
        V: ParamValues + ?Sized,
    {
        Assembler::new(&self.segments, &self.params).substitute(values)
    }

    /// Parameter keys in template order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(Param::key)
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn metadata(&self) -> PathMetadata {
        PathMetadata {
            stringified: self.stringified.clone(),
            keys: self.keys().map(str::to_string).collect(),
        }
    }
}

impl fmt::Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringified)
    }
}

/// Serializable summary of a path (for CLI output)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathMetadata {
    pub stringified: String,
    pub keys: Vec<String>,
}
