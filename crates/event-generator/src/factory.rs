//! Event factory producing serialized events for a fixed schema.

use crate::config::{ConfigError, FactoryConfig};
use crate::event::Event;
use crate::generators::{format_timestamp, generate_alphanumeric};
use crate::names::generate_field_names;
use crate::schema::EventSchema;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tracing::{debug, warn};

/// Error type for factory operations.
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    /// Invalid configuration, the factory was not created
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON encoding of an event failed
    #[error("Failed to serialize event: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Factory that produces events conforming to one randomly named schema.
///
/// The schema is fixed at construction: every event from the same factory
/// (and from every factory forked from it) has the same field names in the
/// same order. The factory owns its random source, so generating takes
/// `&mut self`; concurrent workers each get their own factory via
/// [`EventFactory::fork`].
#[derive(Debug)]
pub struct EventFactory<R = StdRng> {
    /// Configuration the factory was built from
    config: FactoryConfig,
    /// Field names shared with forked factories
    schema: Arc<EventSchema>,
    /// Random source for names and payloads
    rng: R,
}

impl EventFactory<StdRng> {
    /// Create a factory with `num_fields` random fields whose values are
    /// between `min_field_len` (inclusive) and `max_field_len` (exclusive)
    /// characters long. The random source is seeded from the OS.
    pub fn new(
        num_fields: usize,
        min_field_len: usize,
        max_field_len: usize,
    ) -> Result<Self, FactoryError> {
        Self::from_config(
            FactoryConfig::new(num_fields, min_field_len, max_field_len),
            None,
        )
    }

    /// Create a factory from a configuration.
    ///
    /// With a seed, both the schema and the payloads are reproducible;
    /// without one the random source is seeded from the OS.
    pub fn from_config(config: FactoryConfig, seed: Option<u64>) -> Result<Self, FactoryError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> EventFactory<R> {
    /// Create a factory drawing names and payloads from `rng`.
    pub fn with_rng(config: FactoryConfig, mut rng: R) -> Result<Self, FactoryError> {
        config.validate()?;

        let names = match &config.fields {
            Some(fields) => fields.clone(),
            None => generate_field_names(&mut rng, config.num_fields),
        };
        let schema = EventSchema::new(names);

        let duplicates = schema.duplicate_names();
        if !duplicates.is_empty() {
            warn!(
                "Schema contains duplicate field names {:?}; serialized events will repeat these keys",
                duplicates
            );
        }

        debug!(
            "Created event factory with {} fields, value length {}..{}",
            schema.len(),
            config.min_field_len,
            config.max_field_len
        );

        Ok(Self {
            config,
            schema: Arc::new(schema),
            rng,
        })
    }

    /// Create a factory with the same schema and configuration but a
    /// different random source.
    pub fn fork<R2: Rng>(&self, rng: R2) -> EventFactory<R2> {
        EventFactory {
            config: self.config.clone(),
            schema: Arc::clone(&self.schema),
            rng,
        }
    }

    /// Get a reference to the schema.
    pub fn schema(&self) -> &EventSchema {
        &self.schema
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Generate the next event stamped with the current time.
    pub fn next_event(&mut self) -> Event {
        self.next_event_at(Utc::now())
    }

    /// Generate the next event stamped with `now`.
    pub fn next_event_at(&mut self, now: DateTime<Utc>) -> Event {
        let mut values = Vec::with_capacity(self.schema.len());
        values.push(format_timestamp(now));

        for _ in self.schema.generated_field_names() {
            values.push(generate_alphanumeric(
                &mut self.rng,
                self.config.min_field_len,
                self.config.max_field_len,
            ));
        }

        Event::new(Arc::clone(&self.schema), values)
    }

    /// Generate the next event and serialize it as a JSON object.
    pub fn new_event(&mut self) -> Result<Vec<u8>, FactoryError> {
        Ok(self.next_event().to_json_bytes()?)
    }

    /// Generate `count` serialized events.
    ///
    /// Returns an iterator that lazily generates events.
    pub fn events(&mut self, count: usize) -> EventIterator<'_, R> {
        EventIterator {
            factory: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates serialized events.
pub struct EventIterator<'a, R> {
    factory: &'a mut EventFactory<R>,
    remaining: usize,
}

impl<R: Rng> Iterator for EventIterator<'_, R> {
    type Item = Result<Vec<u8>, FactoryError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.factory.new_event())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng> ExactSizeIterator for EventIterator<'_, R> {}
