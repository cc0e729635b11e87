//! serde support: a parsed tree can feed any serde serializer.
//!
//! The impls are written by hand because the tree's natural JSON shape is
//! not the derive output for a tagged enum: objects serialize as maps,
//! arrays as sequences, null as unit.

use crate::types::{JsonArray, JsonObject, JsonValue};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

impl Serialize for JsonValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JsonValue::Object(object) => object.serialize(serializer),
            JsonValue::Array(array) => array.serialize(serializer),
            JsonValue::String(s) => serializer.serialize_str(s),
            JsonValue::Integer(n) => serializer.serialize_i64(*n),
            JsonValue::Float(f) => serializer.serialize_f64(*f),
            JsonValue::Bool(b) => serializer.serialize_bool(*b),
            JsonValue::Null => serializer.serialize_unit(),
        }
    }
}

impl Serialize for JsonObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for member in self.iter() {
            map.serialize_entry(&member.key, &member.value)?;
        }
        map.end()
    }
}

impl Serialize for JsonArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self.iter() {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}
