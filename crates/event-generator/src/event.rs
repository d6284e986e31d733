//! Generated event instances.

use crate::schema::EventSchema;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::Arc;

/// One generated event: a value for every field of the factory's schema.
///
/// Values are stored positionally, aligned with
/// [`EventSchema::field_names`], so the first value is always the timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    schema: Arc<EventSchema>,
    values: Vec<String>,
}

impl Event {
    pub(crate) fn new(schema: Arc<EventSchema>, values: Vec<String>) -> Self {
        debug_assert_eq!(schema.len(), values.len());
        Self { schema, values }
    }

    /// The schema this event conforms to.
    pub fn schema(&self) -> &EventSchema {
        &self.schema
    }

    /// The `Timestamp` value.
    pub fn timestamp(&self) -> &str {
        &self.values[0]
    }

    /// Look up a value by field name.
    ///
    /// With duplicate field names the last one wins, matching what most JSON
    /// parsers do with the serialized form.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.schema
            .field_names()
            .iter()
            .rposition(|field| field == name)
            .map(|pos| self.values[pos].as_str())
    }

    /// Iterate `(field, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.schema
            .field_names()
            .iter()
            .zip(&self.values)
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }

    /// Serialize as a JSON object.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

impl Serialize for Event {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}
