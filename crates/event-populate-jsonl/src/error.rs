//! Error types for JSONL populator.

use thiserror::Error;

/// Errors that can occur during JSONL population.
#[derive(Error, Debug)]
pub enum JsonlPopulatorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Event generator error.
    #[error("Generator error: {0}")]
    Generator(#[from] event_generator::FactoryError),

    /// A generation worker failed or was cancelled.
    #[error("Worker error: {0}")]
    Worker(String),

    /// Options that can't produce any output.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}
