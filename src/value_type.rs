//! CMake cache value types
//!
//! CMake recognizes exactly five type tags in cache entries. Types are
//! optional; an entry without one renders as plain `NAME=VALUE`.

use crate::error::{CacheError, CacheResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of CMake cache value types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// Boolean ON/OFF value
    #[serde(rename = "BOOL")]
    Bool,
    /// Path to a file on disk
    #[serde(rename = "FILEPATH")]
    FilePath,
    /// Path to a directory on disk
    #[serde(rename = "PATH")]
    Path,
    /// Arbitrary string value
    #[serde(rename = "STRING")]
    String,
    /// Internal variable, not shown in configuration UIs
    #[serde(rename = "INTERNAL")]
    Internal,
}

impl ValueType {
    /// All value types, in CMake's documented order
    pub const ALL: [Self; 5] = [
        Self::Bool,
        Self::FilePath,
        Self::Path,
        Self::String,
        Self::Internal,
    ];

    /// The exact tag CMake uses in cache-entry text
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "BOOL",
            Self::FilePath => "FILEPATH",
            Self::Path => "PATH",
            Self::String => "STRING",
            Self::Internal => "INTERNAL",
        }
    }

    /// Look up a value type by its CMake tag (case-sensitive)
    pub fn from_name(name: &str) -> CacheResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.as_str() == name)
            .ok_or_else(|| CacheError::UnknownType(name.to_string()))
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = CacheError;

    fn from_str(s: &str) -> CacheResult<Self> {
        Self::from_name(s)
    }
}
