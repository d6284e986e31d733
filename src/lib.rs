//! event-stresser library
//!
//! Generates synthetic JSON events for load testing log and event ingestion
//! pipelines. A run fixes one randomly named schema (always led by a
//! `Timestamp` field) and emits any number of events conforming to it as
//! JSON Lines, ready to be piped into whatever transport feeds the pipeline
//! under test.
//!
//! # Crates
//!
//! - `event_generator` - field names, schema and event factory
//! - `event_populate_jsonl` - sequential and parallel JSONL writers
//!
//! # CLI Usage
//!
//! ```bash
//! # 10k events with 20 fields of 16..64 characters to stdout
//! event-stresser generate --count 10000 --num-fields 20 --min-field-len 16 --max-field-len 64
//!
//! # Freeze a schema, then reuse it from 8 workers
//! event-stresser schema --num-fields 20 --seed 7 -o profile.yaml
//! event-stresser generate --profile profile.yaml --workers 8 --count 1000000 -o events.jsonl
//! ```

pub mod loadtest;

// Re-export the generator and JSONL crates for convenience
pub use event_generator as generator;
pub use event_populate_jsonl as jsonl;
