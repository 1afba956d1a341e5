//! Plain property values converted from D-Bus variants.
//!
//! The cache and the renderer work on [`PropertyValue`] so they can be
//! exercised without a bus, and so the cache can be dumped as JSON.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use zbus::zvariant::Value;

/// A property value detached from the bus message it arrived in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    List(Vec<PropertyValue>),
    Map(BTreeMap<String, PropertyValue>),
    /// Anything without a plain equivalent (structs, fds), kept as its signature.
    Other(String),
}

impl PropertyValue {
    /// The string inside a `Str`, if that's what this is.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The map inside a `Map`, if that's what this is.
    pub fn as_map(&self) -> Option<&BTreeMap<String, PropertyValue>> {
        match self {
            PropertyValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Int(n) => write!(f, "{}", n),
            PropertyValue::UInt(n) => write!(f, "{}", n),
            PropertyValue::Float(n) => write!(f, "{}", n),
            PropertyValue::Str(s) => f.write_str(s),
            PropertyValue::Other(sig) => write!(f, "<{}>", sig),
            PropertyValue::List(_) | PropertyValue::Map(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Str(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Str(s)
    }
}

impl From<&Value<'_>> for PropertyValue {
    fn from(value: &Value<'_>) -> Self {
        match value {
            Value::Bool(b) => PropertyValue::Bool(*b),
            Value::U8(n) => PropertyValue::UInt(u64::from(*n)),
            Value::U16(n) => PropertyValue::UInt(u64::from(*n)),
            Value::U32(n) => PropertyValue::UInt(u64::from(*n)),
            Value::U64(n) => PropertyValue::UInt(*n),
            Value::I16(n) => PropertyValue::Int(i64::from(*n)),
            Value::I32(n) => PropertyValue::Int(i64::from(*n)),
            Value::I64(n) => PropertyValue::Int(*n),
            Value::F64(n) => PropertyValue::Float(*n),
            Value::Str(s) => PropertyValue::Str(s.to_string()),
            Value::ObjectPath(p) => PropertyValue::Str(p.to_string()),
            Value::Signature(s) => PropertyValue::Str(s.to_string()),
            Value::Value(inner) => PropertyValue::from(&**inner),
            Value::Array(array) => {
                PropertyValue::List(array.iter().map(PropertyValue::from).collect())
            }
            Value::Dict(dict) => PropertyValue::Map(
                dict.iter()
                    .map(|(k, v)| (PropertyValue::from(k).to_string(), PropertyValue::from(v)))
                    .collect(),
            ),
            other => PropertyValue::Other(other.value_signature().to_string()),
        }
    }
}
