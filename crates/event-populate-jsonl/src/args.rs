//! CLI argument definitions for JSONL populator.

use clap::Args;
use event_generator::{ConfigError, FactoryConfig};
use std::path::PathBuf;

/// Arguments describing the event shape, shared by all subcommands.
///
/// Flags override the values loaded from `--profile`; anything not given
/// falls back to [`FactoryConfig::default`].
#[derive(Args, Clone, Debug, Default)]
pub struct FactoryArgs {
    /// Path to a YAML profile (num_fields, min_field_len, max_field_len, fields)
    #[arg(long, short = 'p', env = "EVENT_STRESSER_PROFILE")]
    pub profile: Option<PathBuf>,

    /// Number of random fields per event, not counting Timestamp
    #[arg(long, env = "EVENT_STRESSER_NUM_FIELDS")]
    pub num_fields: Option<usize>,

    /// Minimum field value length (inclusive)
    #[arg(long, env = "EVENT_STRESSER_MIN_FIELD_LEN")]
    pub min_field_len: Option<usize>,

    /// Maximum field value length (exclusive)
    #[arg(long, env = "EVENT_STRESSER_MAX_FIELD_LEN")]
    pub max_field_len: Option<usize>,

    /// Random seed for deterministic generation (same seed = same schema and data)
    #[arg(long, env = "EVENT_STRESSER_SEED")]
    pub seed: Option<u64>,
}

impl FactoryArgs {
    /// Build the factory configuration from the profile and flag overrides.
    pub fn resolve(&self) -> Result<FactoryConfig, ConfigError> {
        let mut config = match &self.profile {
            Some(path) => FactoryConfig::from_file(path)?,
            None => FactoryConfig::default(),
        };

        if let Some(num_fields) = self.num_fields {
            config.num_fields = num_fields;
        }
        if let Some(min_field_len) = self.min_field_len {
            config.min_field_len = min_field_len;
        }
        if let Some(max_field_len) = self.max_field_len {
            config.max_field_len = max_field_len;
        }

        config.validate()?;
        Ok(config)
    }
}

/// JSONL-specific populate arguments.
#[derive(Args, Clone, Debug)]
pub struct JSONLPopulateArgs {
    /// Output file for JSONL events ("-" writes to stdout)
    #[arg(long, short = 'o', default_value = "-", env = "EVENT_STRESSER_OUTPUT")]
    pub output: PathBuf,

    /// Append to the output file instead of truncating it
    #[arg(long)]
    pub append: bool,

    /// Number of events to generate
    #[arg(long, short = 'n', default_value = "1000", env = "EVENT_STRESSER_COUNT")]
    pub count: u64,

    /// Number of parallel generation workers
    #[arg(long, default_value = "1", env = "EVENT_STRESSER_WORKERS")]
    pub workers: usize,

    /// Events per batch handed from a worker to the writer
    #[arg(long, default_value = "100", env = "EVENT_STRESSER_BATCH_SIZE")]
    pub batch_size: usize,

    #[command(flatten)]
    pub factory: FactoryArgs,
}
