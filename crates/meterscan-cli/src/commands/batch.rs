//! Batch command - run every configured source over one token sequence.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use meterscan_core::{MeterscanConfig, ReadingStore, SourceConfig, Token, ValueExtractor};

use super::read_tokens;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Token file: JSON array of strings, or "-" for stdin
    #[arg(required = true)]
    tokens: PathBuf,

    /// Write a summary CSV to this path
    #[arg(long)]
    summary: Option<PathBuf>,
}

/// Result of scanning one source.
struct SourceResult {
    name: String,
    unit: Option<String>,
    store: ReadingStore,
    diagnostics: usize,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let path = config_path
        .map(PathBuf::from)
        .unwrap_or_else(super::config::default_config_path);
    if !path.exists() {
        anyhow::bail!("batch requires a config file; none found at {}", path.display());
    }

    let config = MeterscanConfig::from_file(&path)?;
    config.validate()?;
    if config.sources.is_empty() {
        anyhow::bail!("config has no sources");
    }

    let tokens = read_tokens(&args.tokens)?;
    debug!("Scanning {} tokens for {} sources", tokens.len(), config.sources.len());

    let mut results = Vec::new();
    for source in &config.sources {
        results.push(scan_source(source, &tokens));
    }

    for result in &results {
        print_result(result);
    }

    if let Some(summary_path) = &args.summary {
        write_summary(summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    Ok(())
}

fn scan_source(source: &SourceConfig, tokens: &[Token]) -> SourceResult {
    let extractor = ValueExtractor::from_config(&source.extractor);
    let report = extractor.scan(tokens);

    let mut store = ReadingStore::new();
    store.update(report.value);

    SourceResult {
        name: source.name.clone(),
        unit: source.unit_of_measurement.clone(),
        store,
        diagnostics: report.diagnostics.len(),
    }
}

fn print_result(result: &SourceResult) {
    match result.store.last() {
        Some(reading) => {
            let unit = result.unit.as_deref().unwrap_or("");
            println!(
                "{} {}: {} {}",
                style("✓").green(),
                result.name,
                reading.value,
                unit
            );
        }
        None => println!("{} {}: no reading", style("✗").yellow(), result.name),
    }

    if result.diagnostics > 0 {
        println!(
            "  {} skipped {} malformed candidate(s)",
            style("⚠").yellow(),
            result.diagnostics
        );
    }
}

fn write_summary(path: &PathBuf, results: &[SourceResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["source", "value", "unit", "detected_at"])?;

    for result in results {
        let (value, detected_at) = match result.store.last() {
            Some(reading) => (reading.value.to_string(), reading.detected_at_display()),
            None => (String::new(), String::new()),
        };
        wtr.write_record([
            &result.name,
            &value,
            result.unit.as_deref().unwrap_or(""),
            &detected_at,
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    fs::write(path, data)?;
    Ok(())
}
