//! Cache value representations and boolean coercion
//!
//! CMake has its own boolean grammar: `ON`, `YES`, `Y`, `TRUE` and nonzero
//! numbers are true; `OFF`, `NO`, `N`, `FALSE`, `IGNORE`, `NOTFOUND`, the
//! empty string, `0` and anything ending in `-NOTFOUND` are false. The
//! classifier here reproduces those tables exactly rather than applying a
//! generic truthiness heuristic.

use crate::error::{CacheError, CacheResult};
use serde::{Deserialize, Serialize};
use std::fmt;

const TRUTHY_VALUES: [&str; 4] = ["TRUE", "ON", "YES", "Y"];
const FALSEY_VALUES: [&str; 7] = ["0", "FALSE", "OFF", "NO", "N", "IGNORE", "NOTFOUND"];

/// Suffix CMake appends to variables it failed to resolve
pub const NOTFOUND_SUFFIX: &str = "-NOTFOUND";

/// A single scalar cache value
///
/// Scalars render to their natural text form: `42`, `2.718`, the string
/// itself, or the empty string for [`Scalar::Absent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Boolean scalar, rendered uppercase as CMake writes it
    Bool(bool),
    /// Integer scalar
    Int(i64),
    /// Floating-point scalar
    Float(f64),
    /// Free-text scalar
    String(String),
    /// No value; renders as the empty string
    Absent,
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("TRUE"),
            Self::Bool(false) => f.write_str("FALSE"),
            Self::Int(n) => write!(f, "{}", n),
            // Debug formatting keeps the decimal point (42.0, not 42), so a
            // float can never satisfy the integer rule of the classifier.
            Self::Float(x) => write!(f, "{:?}", x),
            Self::String(s) => f.write_str(s),
            Self::Absent => Ok(()),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// True values are the strings ON, YES, Y, TRUE or any nonzero number
pub fn is_truthy(value: &Scalar) -> bool {
    let text = value.to_string().to_uppercase();
    if TRUTHY_VALUES.contains(&text.as_str()) {
        return true;
    }

    text.parse::<i64>().map(|n| n != 0).unwrap_or(false)
}

/// False values are the strings OFF, NO, N, FALSE, IGNORE, NOTFOUND, the
/// empty string, the constant 0 or any string ending with `-NOTFOUND`
pub fn is_falsey(value: &Scalar) -> bool {
    let text = value.to_string().to_uppercase();
    text.is_empty() || FALSEY_VALUES.contains(&text.as_str()) || text.ends_with(NOTFOUND_SUFFIX)
}

/// Coerce a scalar to a strict bool using CMake's tables
///
/// Fails with [`CacheError::InvalidBoolean`] when the value is neither
/// truthy nor falsey, e.g. free text or any float.
pub fn coerce_bool(value: &Scalar) -> CacheResult<bool> {
    if is_truthy(value) {
        Ok(true)
    } else if is_falsey(value) {
        Ok(false)
    } else {
        Err(CacheError::InvalidBoolean(value.to_string()))
    }
}

/// A cache entry's value: a coerced boolean, a list, or a single scalar
///
/// Two values are equal only when both the variant and the contained value
/// match; `Value::Bool(false)` and a scalar rendering as `FALSE` are never
/// equal even though their text forms coincide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Strict boolean, rendered uppercase `TRUE`/`FALSE`
    Bool(bool),
    /// Ordered list, rendered `;`-joined with no escaping
    List(Vec<Scalar>),
    /// Any other single value
    Scalar(Scalar),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("TRUE"),
            Self::Bool(false) => f.write_str("FALSE"),
            Self::List(items) => {
                let rendered: Vec<String> = items.iter().map(Scalar::to_string).collect();
                f.write_str(&rendered.join(";"))
            }
            Self::Scalar(scalar) => scalar.fmt(f),
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        // A bare boolean scalar is a boolean value; entry construction
        // forces the BOOL type for it.
        match scalar {
            Scalar::Bool(b) => Self::Bool(b),
            other => Self::Scalar(other),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Scalar(Scalar::Int(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Scalar(Scalar::Int(value.into()))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Scalar(Scalar::Int(value.into()))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Scalar(Scalar::Float(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Scalar(Scalar::String(value.to_string()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Scalar(Scalar::String(value))
    }
}

impl<S: Into<Scalar>> From<Vec<S>> for Value {
    fn from(items: Vec<S>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<Scalar>, const N: usize> From<[S; N]> for Value {
    fn from(items: [S; N]) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<Option<Scalar>> for Value {
    fn from(value: Option<Scalar>) -> Self {
        value.unwrap_or(Scalar::Absent).into()
    }
}

fn scalar_from_json(value: serde_json::Value) -> CacheResult<Scalar> {
    match value {
        serde_json::Value::Null => Ok(Scalar::Absent),
        serde_json::Value::Bool(b) => Ok(Scalar::Bool(b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Scalar::Int(i))
            } else {
                // Out-of-range integers fall through as floats
                Ok(Scalar::Float(n.as_f64().unwrap_or(f64::NAN)))
            }
        }
        serde_json::Value::String(s) => Ok(Scalar::String(s)),
        other => Err(CacheError::InvalidList(other.to_string())),
    }
}

/// Dynamic construction path: JSON arrays become lists, JSON booleans become
/// booleans, objects and nested arrays are rejected.
impl TryFrom<serde_json::Value> for Value {
    type Error = CacheError;

    fn try_from(value: serde_json::Value) -> CacheResult<Self> {
        match value {
            serde_json::Value::Array(items) => {
                let scalars = items
                    .into_iter()
                    .map(scalar_from_json)
                    .collect::<CacheResult<Vec<_>>>()?;
                Ok(Self::List(scalars))
            }
            serde_json::Value::Object(map) => {
                Err(CacheError::InvalidList(serde_json::Value::Object(map).to_string()))
            }
            scalar => Ok(scalar_from_json(scalar)?.into()),
        }
    }
}
