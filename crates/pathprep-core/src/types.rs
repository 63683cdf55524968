//! Attribute values carried by graph nodes and edges.
//!
//! Values are loosely typed on the wire (JSON numbers or strings) but every
//! read goes through a checked conversion that reports a `TypeMismatch`
//! instead of silently casting.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PathprepError, Result};

/// Distance value meaning "no finite distance computed yet".
///
/// Generated weights are never negative, so `-1` cannot collide with a real
/// shortest-path distance.
pub const UNSET_DISTANCE: i64 = -1;

/// A single attribute value on a node or edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl AttrValue {
    /// Name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
        }
    }

    pub fn as_i64(&self) -> Result<i64> {
        match self {
            Self::Int(v) => Ok(*v),
            other => Err(PathprepError::TypeMismatch {
                expected: "int",
                found: other.type_name(),
            }),
        }
    }

    /// Read a float. Integers are rejected rather than widened.
    pub fn as_f64(&self) -> Result<f64> {
        match self {
            Self::Float(v) => Ok(*v),
            other => Err(PathprepError::TypeMismatch {
                expected: "float",
                found: other.type_name(),
            }),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Self::Str(v) => Ok(v),
            other => Err(PathprepError::TypeMismatch {
                expected: "string",
                found: other.type_name(),
            }),
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
        }
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}
