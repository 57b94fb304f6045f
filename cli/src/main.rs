//! SubjectKit CLI: build, parse, resolve and match stream subjects.
//!
//! # Commands
//! ```text
//! subjectkit list
//! subjectkit show     <entity> [variant]
//! subjectkit build    <entity> [variant] -f name=value ... [--partial]
//! subjectkit parse    <entity> [variant] --topic <topic> [--json]
//! subjectkit resolve  <topic> [--json]
//! subjectkit match    <pattern> <topic>
//! subjectkit payload  '{"subject": "inputs_coin", "params": {...}}'
//! subjectkit schema
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use subjectkit_core::Pattern;
use subjectkit_observability::init_tracing;
use subjectkit_registry::{schema_entries, SubjectPayload, SubjectRegistry};
use tracing::debug;

mod cmd_subject;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(
    name = "subjectkit",
    about = "SubjectKit CLI: typed subjects for blockchain data streams",
    long_about = "
SubjectKit CLI: build publish topics and subscription patterns for the
blocks, transactions, inputs, outputs, receipts and utxos streams, parse
topics back into typed fields, and check wildcard matches locally.

ENVIRONMENT VARIABLES:
  SUBJECTKIT_LOG    tracing filter directives, overrides the configured level
",
    version
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit JSON structured logs on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    /// YAML config file
    #[arg(short, long, global = true, env = "SUBJECTKIT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every subject with its wildcard and format
    List,

    /// Show the fields of a subject
    Show {
        /// Entity key, e.g. inputs
        entity: String,
        /// Variant key, e.g. coin
        variant: Option<String>,
    },

    /// Build a topic (or a subscription pattern with --partial)
    Build {
        entity: String,
        variant: Option<String>,
        /// Field assignment, repeatable: -f block_height=100
        #[arg(short = 'f', long = "field")]
        fields: Vec<String>,
        /// Replace unset fields with `*`
        #[arg(long)]
        partial: bool,
    },

    /// Parse a topic into typed fields
    Parse {
        entity: String,
        variant: Option<String>,
        /// Concrete topic to parse
        #[arg(long)]
        topic: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find which subject a topic belongs to and decode it
    Resolve {
        topic: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a topic against a wildcard pattern (exit code 1 on no match)
    Match { pattern: String, topic: String },

    /// Turn a `{subject, params}` JSON payload into a subscription pattern
    Payload {
        /// Payload JSON
        json: String,
    },

    /// Print the subject catalog as JSON
    Schema {
        /// Single-line output
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    config.apply_flags(cli.verbose, cli.log_level.as_deref(), cli.json_logs);
    init_tracing(&config.log);

    let registry = SubjectRegistry::global();
    debug!(subjects = registry.len(), "registry ready");

    match cli.command {
        Commands::List => cmd_subject::list(registry),

        Commands::Show { entity, variant } => {
            cmd_subject::show(registry, &entity, variant.as_deref())
        }

        Commands::Build { entity, variant, fields, partial } => cmd_subject::run_build(
            registry,
            &entity,
            variant.as_deref(),
            &fields,
            partial || config.default_partial,
        ),

        Commands::Parse { entity, variant, topic, json } => {
            cmd_subject::run_parse(registry, &entity, variant.as_deref(), &topic, json)
        }

        Commands::Resolve { topic, json } => cmd_resolve(registry, &topic, json),

        Commands::Match { pattern, topic } => cmd_match(&pattern, &topic),

        Commands::Payload { json } => cmd_payload(registry, &json),

        Commands::Schema { compact } => cmd_schema(registry, compact),
    }
}

// ─── Command implementations ─────────────────────────────────────────────────

fn cmd_resolve(registry: &SubjectRegistry, topic: &str, as_json: bool) -> Result<()> {
    let resolved = registry
        .resolve(topic)
        .with_context(|| format!("cannot resolve '{topic}'"))?;
    cmd_subject::print_fields(resolved.definition, &resolved.fields, as_json)
}

fn cmd_match(pattern: &str, topic: &str) -> Result<()> {
    let pattern = Pattern::new(pattern)?;
    if pattern.matches(topic) {
        println!("✓ '{topic}' matches '{pattern}'");
        Ok(())
    } else {
        eprintln!("✗ '{topic}' does not match '{pattern}'");
        std::process::exit(1);
    }
}

fn cmd_payload(registry: &SubjectRegistry, json: &str) -> Result<()> {
    let payload = SubjectPayload::from_json(json).context("invalid payload JSON")?;
    let topic = payload.to_topic(registry)?;
    println!("{topic}");
    Ok(())
}

fn cmd_schema(registry: &SubjectRegistry, compact: bool) -> Result<()> {
    let entries = schema_entries(registry);
    let out = if compact {
        serde_json::to_string(&entries)?
    } else {
        serde_json::to_string_pretty(&entries)?
    };
    println!("{out}");
    Ok(())
}
