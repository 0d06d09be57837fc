//! JSON support, enabled by the `serde` feature.
//!
//! Loading a bag from a JSON object is the usual way to pre-populate it with
//! settings. Object order is preserved, so the document's key order becomes
//! the bag's key order. Only data values serialize; non-finite floats,
//! callables, protected callables and objects are rejected with a
//! descriptive error.

use crate::bag::OrderedBag;
use crate::error::BagError;
use crate::value::Value;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Error as _, Serialize, Serializer};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            Value::Float(f) => Err(S::Error::custom(format!(
                "cannot serialize a non-finite float ({f})"
            ))),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(items) => items.serialize(serializer),
            Value::Map(map) => map.serialize(serializer),
            other => Err(S::Error::custom(format!(
                "cannot serialize a value of kind `{}`",
                other.kind()
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl Serialize for OrderedBag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for OrderedBag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = indexmap::IndexMap::<String, Value>::deserialize(deserializer)?;
        Ok(OrderedBag::from(entries))
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl OrderedBag {
    /// Parses a JSON object into a bag.
    ///
    /// # Errors
    ///
    /// - Returns `BagError::Json` if `source` is not valid JSON
    /// - Returns `BagError::NotAnObject` if the top level is not an object
    pub fn from_json_str(source: &str) -> Result<Self, BagError> {
        let json: serde_json::Value = serde_json::from_str(source)?;
        Self::from_json_value(json)
    }

    /// Converts a JSON object into a bag.
    ///
    /// # Errors
    ///
    /// Returns `BagError::NotAnObject` if `json` is not an object.
    pub fn from_json_value(json: serde_json::Value) -> Result<Self, BagError> {
        match json {
            serde_json::Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(BagError::NotAnObject(json_kind(&other))),
        }
    }

    /// Converts the bag into a JSON object.
    ///
    /// # Errors
    ///
    /// Returns `BagError::Json` if any entry holds a callable, an object or a
    /// non-finite float.
    pub fn to_json(&self) -> Result<serde_json::Value, BagError> {
        Ok(serde_json::to_value(self)?)
    }
}
