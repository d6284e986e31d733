//! Event generator for the event-stresser load testing tool.
//!
//! This crate provides the [`EventFactory`], which fixes a randomly named
//! schema at construction time and then produces any number of independent
//! JSON events conforming to it. The random source is owned by the factory,
//! so a seeded factory produces reproducible schemas and payloads.
//!
//! # Architecture
//!
//! ```text
//! FactoryConfig (flags / YAML profile)
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │    EventFactory      │
//! │                      │
//! │  - config            │
//! │  - schema (Arc)      │──── fork(rng) ───▶ EventFactory (per worker)
//! │  - rng (StdRng)      │
//! └──────────┬───────────┘
//!            │
//!            ▼
//!    {"Timestamp": "...", "Qwerty": "a8k2...", ...}
//! ```
//!
//! # Example
//!
//! ```rust
//! use event_generator::EventFactory;
//!
//! let mut factory = EventFactory::new(3, 8, 12).unwrap();
//! assert_eq!(factory.schema().len(), 4);
//!
//! let bytes = factory.new_event().unwrap();
//! let event: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
//! assert!(event.get("Timestamp").is_some());
//! ```

pub mod config;
pub mod event;
pub mod factory;
pub mod generators;
pub mod names;
pub mod schema;

// Re-exports for convenience
pub use config::{ConfigError, FactoryConfig};
pub use event::Event;
pub use factory::{EventFactory, EventIterator, FactoryError};
pub use names::{generate_field_names, MAX_FIELD_NAME_LEN, MIN_FIELD_NAME_LEN};
pub use schema::{EventSchema, TIMESTAMP_FIELD};
