//! underwriting: score a financial statement JSON file and print its flags.
//!
//! The input is an upload of the form `{"data": {"financials": [...]}}`, or the
//! bare `{"financials": [...]}` object with `--raw`.
//!
//! Usage:
//!   underwriting                          # scores ./data.json
//!   underwriting upload.json --with-metrics
//!   underwriting statement.json --raw --compact
//!   UNDERWRITING_LOG_FORMAT=json RUST_LOG=underwriting_rules=debug underwriting upload.json

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use underwriting_core::FinancialDocument;
use underwriting_rules::{upload_document, ModelRegistry};

use config::{CliConfig, LogFormat};

#[derive(Parser, Debug)]
#[command(name = "underwriting")]
#[command(version)]
#[command(about = "Score a company's financial statement against underwriting rules", long_about = None)]
struct Cli {
    /// JSON file to score
    #[arg(default_value = "data.json")]
    input: PathBuf,

    /// Scoring model (overrides UNDERWRITING_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Input is the financial document itself, not an upload wrapping it in `data`
    #[arg(long)]
    raw: bool,

    /// Print the scored record index and metrics along with the flags
    #[arg(long)]
    with_metrics: bool,

    /// Single-line JSON output
    #[arg(long)]
    compact: bool,

    /// Log output format (overrides UNDERWRITING_LOG_FORMAT)
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "underwriting=info,underwriting_rules=info".into());

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

/// Score JSON input text and build the JSON printed on stdout.
fn score(text: &str, raw: bool, with_metrics: bool, model_name: &str) -> Result<Value> {
    let document: FinancialDocument = if raw {
        text.parse()?
    } else {
        let upload: Value = serde_json::from_str(text).context("input is not valid JSON")?;
        upload_document(&upload)?
    };

    let registry = ModelRegistry::with_defaults();
    let model = registry
        .get(model_name)
        .with_context(|| format!("available models: {}", registry.names().join(", ")))?;

    let output = if with_metrics {
        serde_json::to_value(model.report(&document))?
    } else {
        serde_json::to_value(model.evaluate(&document))?
    };
    Ok(output)
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::from_env().with_overrides(cli.model.clone(), cli.log_format);
    init_tracing(config.log_format);

    let text = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    tracing::info!(input = %cli.input.display(), model = %config.model, "Scoring financial statement");
    let output = score(&text, cli.raw, cli.with_metrics, &config.model)
        .with_context(|| format!("Failed to score {}", cli.input.display()))?;

    let rendered = if cli.compact {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    println!("{}", rendered);

    Ok(())
}
