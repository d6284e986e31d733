//! JSONL populator writing events from a single factory.

use crate::error::JsonlPopulatorError;
use event_generator::EventFactory;
use rand::rngs::StdRng;
use rand::Rng;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for JSONL writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of events written.
    pub rows_written: u64,
    /// Number of bytes written, newlines included.
    pub bytes_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating events, summed over workers.
    pub generation_duration: Duration,
    /// Time spent writing events.
    pub write_duration: Duration,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.bytes_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// JSONL populator that writes events from one factory, in order.
pub struct JsonlPopulator<R = StdRng> {
    factory: EventFactory<R>,
}

impl<R: Rng> JsonlPopulator<R> {
    /// Create a new JSONL populator around `factory`.
    pub fn new(factory: EventFactory<R>) -> Self {
        Self { factory }
    }

    /// Get a reference to the factory.
    pub fn factory(&self) -> &EventFactory<R> {
        &self.factory
    }

    /// Generate a JSONL file with `count` events, replacing any existing file.
    pub fn populate<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        count: u64,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        let output_path = output_path.as_ref();
        info!(
            "Generating JSONL file '{}' with {} events",
            output_path.display(),
            count
        );

        let file = File::create(output_path)?;
        self.write_events(file, count)
    }

    /// Append `count` events to a JSONL file, creating it if needed.
    pub fn populate_append<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        count: u64,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        let output_path = output_path.as_ref();
        info!(
            "Appending {} events to JSONL file '{}'",
            count,
            output_path.display()
        );

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(output_path)?;
        self.write_events(file, count)
    }

    /// Write `count` events, one JSON object per line, to `writer`.
    pub fn write_events<W: Write>(
        &mut self,
        writer: W,
        count: u64,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();
        let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, writer);

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        for _ in 0..count {
            let gen_start = Instant::now();
            let event = self.factory.new_event()?;
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            writer.write_all(&event)?;
            writer.write_all(b"\n")?;
            write_time += write_start.elapsed();

            metrics.rows_written += 1;
            metrics.bytes_written += event.len() as u64 + 1;

            if metrics.rows_written % 10000 == 0 {
                debug!("Written {} events", metrics.rows_written);
            }
        }

        writer.flush()?;

        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        info!(
            "JSONL generation complete: {} events, {} bytes in {:?} ({:.2} events/sec)",
            metrics.rows_written,
            metrics.bytes_written,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}
