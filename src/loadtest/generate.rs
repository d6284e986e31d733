//! Loadtest generate command handler.

use anyhow::Context;
use event_generator::EventFactory;
use event_populate_jsonl::{
    is_stdout, open_sink, populate_parallel, JSONLPopulateArgs, JsonlPopulator, ParallelOptions,
    PopulateMetrics,
};

/// Run the generate command: write `count` events as JSONL.
///
/// A single worker writes events in generation order straight from the
/// factory; more workers fan out over forked factories.
pub async fn run_generate(args: JSONLPopulateArgs) -> anyhow::Result<()> {
    // Checked up front so a rejected run never touches the output file
    let options = ParallelOptions {
        count: args.count,
        workers: args.workers,
        batch_size: args.batch_size,
        seed: args.factory.seed,
    };
    options.validate().context("Invalid generate options")?;

    let config = args
        .factory
        .resolve()
        .context("Invalid event configuration")?;
    let factory = EventFactory::from_config(config, args.factory.seed)
        .context("Failed to create event factory")?;

    tracing::info!(
        "Generating {} events with {} fields (seed={:?})",
        args.count,
        factory.schema().len(),
        args.factory.seed
    );
    tracing::debug!("Event schema: {:?}", factory.schema().field_names());

    let metrics = if args.workers == 1 {
        write_sequential(factory, &args)?
    } else {
        let sink = open_sink(&args.output, args.append)
            .await
            .with_context(|| format!("Failed to open output {:?}", args.output))?;
        populate_parallel(&factory, &options, sink)
            .await
            .context("Failed to generate events")?
    };

    tracing::info!(
        "Generated {} events ({} bytes) in {:?} ({:.2} events/sec, {:.2} MB/sec)",
        metrics.rows_written,
        metrics.bytes_written,
        metrics.total_duration,
        metrics.rows_per_second(),
        metrics.bytes_per_second() / 1_000_000.0
    );

    Ok(())
}

fn write_sequential(
    factory: EventFactory,
    args: &JSONLPopulateArgs,
) -> anyhow::Result<PopulateMetrics> {
    let mut populator = JsonlPopulator::new(factory);

    let result = if is_stdout(&args.output) {
        populator.write_events(std::io::stdout().lock(), args.count)
    } else if args.append {
        populator.populate_append(&args.output, args.count)
    } else {
        populator.populate(&args.output, args.count)
    };

    result.with_context(|| format!("Failed to write events to {:?}", args.output))
}
