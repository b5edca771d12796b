// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed configuration values as loaded from a store.
//!
//! Stores decide how text is typed when they load a file. The classifier only
//! looks at string values; every other variant is described by its type name.

use serde::Serialize;
use std::fmt;

/// A value read from a configuration store.
///
/// # Examples
///
/// ```
/// use samplify::domain::RawValue;
///
/// assert_eq!(RawValue::from(5432).type_name(), "int");
/// assert_eq!(RawValue::from("localhost").type_name(), "str");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    /// A text value
    Str(String),
    /// An integer value
    Int(i64),
    /// A floating-point value
    Float(f64),
    /// A boolean value
    Bool(bool),
    /// An explicit empty value
    Null,
}

impl RawValue {
    /// Returns the literal type name used as the fallback label.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Str(_) => "str",
            RawValue::Int(_) => "int",
            RawValue::Float(_) => "float",
            RawValue::Bool(_) => "bool",
            RawValue::Null => "null",
        }
    }

    /// Returns the text of a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Str(s)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Str(s.to_string())
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Int(n)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        RawValue::Int(i64::from(n))
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Float(n)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Str(s) => f.write_str(s),
            RawValue::Int(n) => write!(f, "{}", n),
            // Debug keeps the decimal point on whole floats
            RawValue::Float(n) => write!(f, "{:?}", n),
            RawValue::Bool(b) => write!(f, "{}", b),
            RawValue::Null => Ok(()),
        }
    }
}
