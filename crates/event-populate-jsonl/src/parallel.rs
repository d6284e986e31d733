//! Parallel JSONL generation.
//!
//! ```text
//!  worker 0 (fork, rng 0) ──┐
//!  worker 1 (fork, rng 1) ──┼── mpsc (bounded) ──▶ writer ──▶ sink
//!  worker N (fork, rng N) ──┘
//! ```
//!
//! Workers run on the blocking pool since generation is pure CPU work. Each
//! owns a forked factory, so they share the schema and nothing else. Batches
//! from different workers interleave in arrival order.

use crate::error::JsonlPopulatorError;
use crate::populator::{PopulateMetrics, DEFAULT_BUFFER_SIZE};
use event_generator::EventFactory;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Settings for [`populate_parallel`].
#[derive(Debug, Clone)]
pub struct ParallelOptions {
    /// Total number of events across all workers
    pub count: u64,
    /// Number of generation workers
    pub workers: usize,
    /// Events per batch sent to the writer
    pub batch_size: usize,
    /// Base seed; worker seeds are derived from it
    pub seed: Option<u64>,
}

impl ParallelOptions {
    /// Reject options that can't produce any output.
    pub fn validate(&self) -> Result<(), JsonlPopulatorError> {
        if self.workers == 0 {
            return Err(JsonlPopulatorError::InvalidOptions(
                "workers must be at least 1".to_string(),
            ));
        }
        if self.batch_size == 0 {
            return Err(JsonlPopulatorError::InvalidOptions(
                "batch_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Lines generated by one worker in one go.
struct Batch {
    rows: u64,
    bytes: Vec<u8>,
}

/// Seed for worker `worker` derived from the base seed.
pub fn worker_seed(base_seed: u64, worker: usize) -> u64 {
    base_seed.wrapping_add((worker as u64).wrapping_mul(0x9E3779B97F4A7C15))
}

/// Split `count` events across `workers` as evenly as possible.
///
/// The first `count % workers` workers get one extra event.
pub fn split_count(count: u64, workers: usize) -> Vec<u64> {
    if workers == 0 {
        return Vec::new();
    }

    let workers_u64 = workers as u64;
    let base = count / workers_u64;
    let extra = count % workers_u64;

    (0..workers_u64)
        .map(|i| base + u64::from(i < extra))
        .collect()
}

/// Generate `options.count` events with parallel workers and write them as
/// JSONL to `sink`.
pub async fn populate_parallel<R, W>(
    factory: &EventFactory<R>,
    options: &ParallelOptions,
    sink: W,
) -> Result<PopulateMetrics, JsonlPopulatorError>
where
    R: Rng,
    W: AsyncWrite + Unpin,
{
    options.validate()?;

    let start_time = Instant::now();
    info!(
        "Generating {} events with {} workers (batch size {})",
        options.count, options.workers, options.batch_size
    );

    let (tx, mut rx) = mpsc::channel::<Batch>(options.workers * 2);
    let mut handles = Vec::with_capacity(options.workers);

    for (worker, share) in split_count(options.count, options.workers)
        .into_iter()
        .enumerate()
    {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(worker_seed(seed, worker)),
            None => StdRng::from_os_rng(),
        };
        let factory = factory.fork(rng);
        let tx = tx.clone();
        let batch_size = options.batch_size as u64;

        handles.push(tokio::task::spawn_blocking(move || {
            run_worker(factory, share, batch_size, tx)
        }));
    }
    drop(tx);

    let mut metrics = PopulateMetrics::default();
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, sink);

    // Stop consuming on the first write error; dropping the receiver makes
    // the remaining workers bail out.
    let write_result: std::io::Result<()> = async {
        while let Some(batch) = rx.recv().await {
            let write_start = Instant::now();
            writer.write_all(&batch.bytes).await?;
            metrics.write_duration += write_start.elapsed();

            let before = metrics.rows_written;
            metrics.rows_written += batch.rows;
            metrics.bytes_written += batch.bytes.len() as u64;

            if before / 10000 != metrics.rows_written / 10000 {
                debug!("Written {} events", metrics.rows_written);
            }
        }
        writer.flush().await
    }
    .await;
    drop(rx);

    let mut worker_error = None;
    for handle in handles {
        match handle.await {
            Ok(Ok(generation)) => metrics.generation_duration += generation,
            Ok(Err(e)) => {
                worker_error.get_or_insert(e);
            }
            Err(e) => {
                worker_error.get_or_insert(JsonlPopulatorError::Worker(e.to_string()));
            }
        }
    }

    write_result?;
    if let Some(e) = worker_error {
        return Err(e);
    }

    metrics.total_duration = start_time.elapsed();

    info!(
        "JSONL generation complete: {} events, {} bytes in {:?} ({:.2} events/sec)",
        metrics.rows_written,
        metrics.bytes_written,
        metrics.total_duration,
        metrics.rows_per_second()
    );

    Ok(metrics)
}

/// Generate `count` events in batches and hand them to the writer.
///
/// Returns the time spent generating.
fn run_worker(
    mut factory: EventFactory<StdRng>,
    count: u64,
    batch_size: u64,
    tx: mpsc::Sender<Batch>,
) -> Result<Duration, JsonlPopulatorError> {
    let mut generation = Duration::ZERO;
    let mut remaining = count;

    while remaining > 0 {
        let rows = remaining.min(batch_size);

        let gen_start = Instant::now();
        let mut bytes = Vec::new();
        for _ in 0..rows {
            bytes.extend_from_slice(&factory.new_event()?);
            bytes.push(b'\n');
        }
        generation += gen_start.elapsed();

        if tx.blocking_send(Batch { rows, bytes }).is_err() {
            return Err(JsonlPopulatorError::Worker(
                "writer stopped before all events were sent".to_string(),
            ));
        }
        remaining -= rows;
    }

    Ok(generation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use event_generator::{FactoryConfig, TIMESTAMP_FIELD};
    use std::collections::HashSet;

    fn test_factory() -> EventFactory {
        EventFactory::from_config(FactoryConfig::new(5, 4, 10), Some(42)).unwrap()
    }

    fn options(count: u64, workers: usize, batch_size: usize) -> ParallelOptions {
        ParallelOptions {
            count,
            workers,
            batch_size,
            seed: Some(7),
        }
    }

    #[test]
    fn test_split_count() {
        assert_eq!(split_count(10, 3), vec![4, 3, 3]);
        assert_eq!(split_count(2, 4), vec![1, 1, 0, 0]);
        assert_eq!(split_count(9, 1), vec![9]);
        assert!(split_count(9, 0).is_empty());
        assert_eq!(split_count(1000, 7).iter().sum::<u64>(), 1000);
    }

    #[test]
    fn test_worker_seed() {
        assert_eq!(worker_seed(42, 0), 42);
        assert_ne!(worker_seed(42, 1), worker_seed(42, 2));
        assert_eq!(worker_seed(u64::MAX, 1), u64::MAX.wrapping_add(0x9E3779B97F4A7C15));
    }

    #[tokio::test]
    async fn test_populate_parallel_writes_all_events() {
        let factory = test_factory();
        let mut out = Vec::new();

        let metrics = populate_parallel(&factory, &options(1000, 4, 64), &mut out)
            .await
            .unwrap();

        assert_eq!(metrics.rows_written, 1000);
        assert_eq!(metrics.bytes_written, out.len() as u64);

        let expected: HashSet<&str> = factory
            .schema()
            .field_names()
            .iter()
            .map(String::as_str)
            .collect();

        let content = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 1000);

        for line in lines {
            let json: serde_json::Value = serde_json::from_str(line).unwrap();
            let keys: HashSet<&str> = json
                .as_object()
                .unwrap()
                .keys()
                .map(String::as_str)
                .collect();
            assert_eq!(keys, expected);
            assert!(json[TIMESTAMP_FIELD].is_string());
        }
    }

    #[tokio::test]
    async fn test_more_workers_than_events() {
        let factory = test_factory();
        let mut out = Vec::new();

        let metrics = populate_parallel(&factory, &options(3, 8, 10), &mut out)
            .await
            .unwrap();

        assert_eq!(metrics.rows_written, 3);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
    }

    #[tokio::test]
    async fn test_zero_events() {
        let factory = test_factory();
        let mut out = Vec::new();

        let metrics = populate_parallel(&factory, &options(0, 2, 10), &mut out)
            .await
            .unwrap();

        assert_eq!(metrics.rows_written, 0);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_options() {
        let factory = test_factory();

        let result = populate_parallel(&factory, &options(10, 0, 10), Vec::new()).await;
        assert!(matches!(result, Err(JsonlPopulatorError::InvalidOptions(_))));

        let result = populate_parallel(&factory, &options(10, 2, 0), Vec::new()).await;
        assert!(matches!(result, Err(JsonlPopulatorError::InvalidOptions(_))));
    }

    #[tokio::test]
    async fn test_single_worker_is_deterministic() {
        let factory = test_factory();

        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        populate_parallel(&factory, &options(20, 1, 5), &mut out1)
            .await
            .unwrap();
        populate_parallel(&factory, &options(20, 1, 5), &mut out2)
            .await
            .unwrap();

        let payloads = |out: Vec<u8>| -> Vec<serde_json::Value> {
            String::from_utf8(out)
                .unwrap()
                .lines()
                .map(|line| {
                    let mut json: serde_json::Value = serde_json::from_str(line).unwrap();
                    json.as_object_mut().unwrap().remove(TIMESTAMP_FIELD);
                    json
                })
                .collect()
        };
        assert_eq!(payloads(out1), payloads(out2));
    }
}
