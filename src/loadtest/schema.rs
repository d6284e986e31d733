//! Loadtest schema command handler.

use anyhow::Context;
use clap::{Args, ValueEnum};
use event_generator::{EventFactory, FactoryConfig};
use event_populate_jsonl::FactoryArgs;
use std::path::PathBuf;

/// Output format for the schema command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaFormat {
    /// YAML profile, usable with `generate --profile`
    Yaml,
    /// JSON object with the same keys
    Json,
}

/// Arguments for the schema command.
#[derive(Args, Clone, Debug)]
pub struct SchemaArgs {
    /// Write the profile to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "yaml")]
    pub format: SchemaFormat,

    #[command(flatten)]
    pub factory: FactoryArgs,
}

/// Build a factory and return its configuration with the field names pinned.
pub fn pinned_profile(args: &FactoryArgs) -> anyhow::Result<FactoryConfig> {
    let config = args.resolve().context("Invalid event configuration")?;
    let factory =
        EventFactory::from_config(config, args.seed).context("Failed to create event factory")?;

    Ok(factory
        .config()
        .clone()
        .with_fields(factory.schema().generated_field_names().to_vec()))
}

/// Render a profile in the requested format.
pub fn render_profile(profile: &FactoryConfig, format: SchemaFormat) -> anyhow::Result<String> {
    let rendered = match format {
        SchemaFormat::Yaml => profile.to_yaml().context("Failed to render YAML profile")?,
        SchemaFormat::Json => {
            let mut json = serde_json::to_string_pretty(profile)
                .context("Failed to render JSON profile")?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}

/// Run the schema command: print a profile with generated field names pinned,
/// so later `generate --profile` runs reuse the same schema.
pub fn run_schema(args: SchemaArgs) -> anyhow::Result<()> {
    let profile = pinned_profile(&args.factory)?;
    let rendered = render_profile(&profile, args.format)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write profile to {}", path.display()))?;
            tracing::info!(
                "Wrote profile with {} fields to {}",
                profile.num_fields,
                path.display()
            );
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factory_args(seed: u64) -> FactoryArgs {
        FactoryArgs {
            num_fields: Some(3),
            min_field_len: Some(8),
            max_field_len: Some(12),
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn test_pinned_profile() {
        let profile = pinned_profile(&factory_args(42)).unwrap();

        assert_eq!(profile.num_fields, 3);
        assert_eq!(profile.fields.as_ref().map(Vec::len), Some(3));
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_pinned_profile_is_seeded() {
        assert_eq!(
            pinned_profile(&factory_args(42)).unwrap(),
            pinned_profile(&factory_args(42)).unwrap()
        );
    }

    #[test]
    fn test_yaml_profile_reloads() {
        let profile = pinned_profile(&factory_args(5)).unwrap();
        let yaml = render_profile(&profile, SchemaFormat::Yaml).unwrap();

        assert_eq!(FactoryConfig::from_yaml(&yaml).unwrap(), profile);
    }

    #[test]
    fn test_json_profile() {
        let profile = pinned_profile(&factory_args(5)).unwrap();
        let json = render_profile(&profile, SchemaFormat::Json).unwrap();

        let parsed: FactoryConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, profile);
    }

    #[test]
    fn test_invalid_bounds() {
        let args = FactoryArgs {
            min_field_len: Some(12),
            max_field_len: Some(10),
            ..Default::default()
        };
        assert!(pinned_profile(&args).is_err());
    }
}
