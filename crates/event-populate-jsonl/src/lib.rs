//! JSONL (JSON Lines) event writer for load testing.
//!
//! This crate writes events produced by an [`event_generator::EventFactory`]
//! one per line to a file or stdout, either from a single factory or from
//! several workers running in parallel, each with its own random source.
//!
//! # Example
//!
//! ```ignore
//! use event_generator::EventFactory;
//! use event_populate_jsonl::JsonlPopulator;
//!
//! let factory = EventFactory::new(10, 16, 25)?;
//! let mut populator = JsonlPopulator::new(factory);
//!
//! let metrics = populator.populate("events.jsonl", 1000)?;
//! println!("Generated {} events in {:?}", metrics.rows_written, metrics.total_duration);
//! ```

pub mod args;
pub mod error;
pub mod parallel;
pub mod populator;
pub mod sink;

pub use args::{FactoryArgs, JSONLPopulateArgs};
pub use error::JsonlPopulatorError;
pub use parallel::{populate_parallel, split_count, worker_seed, ParallelOptions};
pub use populator::{JsonlPopulator, PopulateMetrics};
pub use sink::{is_stdout, open_sink, Sink};
