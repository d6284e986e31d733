//! Event schema: the ordered field names every event from a factory carries.

use std::collections::HashSet;

/// Name of the field that always comes first and holds the generation time.
pub const TIMESTAMP_FIELD: &str = "Timestamp";

/// Ordered list of field names shared by all events of one factory.
///
/// The first entry is always [`TIMESTAMP_FIELD`]. The schema is immutable
/// once built; factories share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSchema {
    fields: Vec<String>,
}

impl EventSchema {
    /// Build a schema from the generated (non-timestamp) field names.
    pub fn new(names: Vec<String>) -> Self {
        let mut fields = Vec::with_capacity(names.len() + 1);
        fields.push(TIMESTAMP_FIELD.to_string());
        fields.extend(names);
        Self { fields }
    }

    /// All field names, `Timestamp` first.
    pub fn field_names(&self) -> &[String] {
        &self.fields
    }

    /// Field names after `Timestamp`, i.e. the ones holding random payload.
    pub fn generated_field_names(&self) -> &[String] {
        &self.fields[1..]
    }

    /// Total number of fields including `Timestamp`.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false: a schema holds at least the timestamp field.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Names that appear more than once, in order of their second appearance.
    ///
    /// Generated names are not deduplicated, and a generated name may also
    /// collide with `Timestamp`. Colliding keys end up repeated in the
    /// serialized JSON object.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();

        for name in &self.fields {
            if !seen.insert(name.as_str()) && reported.insert(name.as_str()) {
                duplicates.push(name.as_str());
            }
        }

        duplicates
    }
}
