//! Ordinary serialization: the JSON text projection of a record.
//!
//! Serialization traverses only the visible key space. Rules:
//! - symbol-keyed entries are omitted at every nesting depth
//! - non-enumerable string-keyed entries are omitted
//! - undefined-valued record entries are dropped; undefined inside a
//!   list serializes as `null`
//! - non-finite floats serialize as `null`
//!
//! A record whose only entries are symbol-keyed serializes to `"{}"`.

use crate::errors::{ObjectError, ObjectResult};
use crate::{PropertyMap, Value};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Serialize a record to JSON text.
pub fn to_json(map: &PropertyMap) -> ObjectResult<String> {
    serde_json::to_string(map).map_err(|e| ObjectError::Json(e.to_string()))
}

impl PropertyMap {
    /// Serialize this record to JSON text. See the module docs for what
    /// the projection omits.
    pub fn to_json(&self) -> ObjectResult<String> {
        to_json(self)
    }
}

impl Serialize for PropertyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let count = self
            .entries()
            .filter(|(_, value)| !value.is_undefined())
            .count();
        let mut map = serializer.serialize_map(Some(count))?;
        for (name, value) in self.entries().filter(|(_, value)| !value.is_undefined()) {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(x) if x.is_finite() => serializer.serialize_f64(*x),
            Value::Float(_) => serializer.serialize_unit(),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Record(map) => map.serialize(serializer),
        }
    }
}
