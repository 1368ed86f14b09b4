//! Cache entries
//!
//! A cache entry is a named, optionally typed value. CMake does not require
//! a type, so entries render as `NAME=VALUE` or `NAME:TYPE=VALUE`. Entries
//! are immutable once constructed; replacing one in a [`Cache`] is the only
//! form of mutation.
//!
//! [`Cache`]: crate::cache::Cache

use crate::error::{CacheError, CacheResult};
use crate::value::{coerce_bool, Scalar, Value};
use crate::value_type::ValueType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single entry in a CMake cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    name: String,
    value: Value,
    value_type: Option<ValueType>,
}

impl CacheEntry {
    /// Create an untyped entry
    ///
    /// Lists are forced to the `STRING` type and booleans to `BOOL`, as
    /// CMake itself writes them; anything else stays untyped.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> CacheResult<Self> {
        Self::build(name.into(), value.into(), None)
    }

    /// Create a typed entry
    ///
    /// A `BOOL` type coerces the value through CMake's truthy/falsey tables
    /// and fails with [`CacheError::InvalidBoolean`] when it fits neither.
    /// List values override the requested type with `STRING`.
    pub fn typed(
        name: impl Into<String>,
        value: impl Into<Value>,
        value_type: ValueType,
    ) -> CacheResult<Self> {
        Self::build(name.into(), value.into(), Some(value_type))
    }

    fn build(name: String, value: Value, value_type: Option<ValueType>) -> CacheResult<Self> {
        if name.is_empty() {
            return Err(CacheError::InvalidName);
        }

        let (value, value_type) = match value {
            // Lists are always treated as string value types.
            Value::List(items) => (Value::List(items), Some(ValueType::String)),
            Value::Bool(b) => (Value::Bool(b), Some(ValueType::Bool)),
            Value::Scalar(scalar) if value_type == Some(ValueType::Bool) => {
                (Value::Bool(coerce_bool(&scalar)?), Some(ValueType::Bool))
            }
            other => (other, value_type),
        };

        Ok(Self {
            name,
            value,
            value_type,
        })
    }

    /// Entry name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entry value
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Entry value type, if one was assigned
    pub fn value_type(&self) -> Option<ValueType> {
        self.value_type
    }
}

impl fmt::Display for CacheEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value_type {
            Some(value_type) => write!(f, "{}:{}={}", self.name, value_type, self.value),
            None => write!(f, "{}={}", self.name, self.value),
        }
    }
}

/// Infer a scalar from untyped entry text: integer, then float, then string
fn infer_scalar(text: &str) -> Scalar {
    if text.is_empty() {
        Scalar::Absent
    } else if let Ok(n) = text.parse::<i64>() {
        Scalar::Int(n)
    } else if let Ok(x) = text.parse::<f64>() {
        Scalar::Float(x)
    } else {
        Scalar::String(text.to_string())
    }
}

impl FromStr for CacheEntry {
    type Err = CacheError;

    /// Parse the `NAME[:TYPE]=VALUE` text form back into an entry
    ///
    /// `STRING`-typed values containing `;` parse as lists; list rendering
    /// performs no escaping, so an element containing a literal `;` cannot
    /// survive a round trip and is unsupported.
    fn from_str(s: &str) -> CacheResult<Self> {
        let (lhs, raw_value) = s
            .split_once('=')
            .ok_or_else(|| CacheError::MalformedEntry(s.to_string()))?;

        let (name, value_type) = match lhs.split_once(':') {
            Some((name, tag)) => (name, Some(ValueType::from_name(tag)?)),
            None => (lhs, None),
        };

        let value = match value_type {
            Some(ValueType::Bool) => Value::Scalar(Scalar::String(raw_value.to_string())),
            Some(ValueType::String) if raw_value.contains(';') => Value::List(
                raw_value
                    .split(';')
                    .map(|item| Scalar::String(item.to_string()))
                    .collect(),
            ),
            Some(_) => Value::Scalar(Scalar::String(raw_value.to_string())),
            None => Value::Scalar(infer_scalar(raw_value)),
        };

        Self::build(name.to_string(), value, value_type)
    }
}
