//! Extract command - pull one reading from a token sequence.

use std::path::PathBuf;

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::info;

use meterscan_core::{
    ExtractorConfig, KeywordPosition, MeterscanConfig, ScanReport, ValueExtractor,
};

use super::read_tokens;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Token file: JSON array of strings, or "-" for stdin
    #[arg(required = true)]
    tokens: PathBuf,

    /// Use a named source from the config file instead of flags
    #[arg(short, long, conflicts_with_all = ["keyword", "position", "digits"])]
    source: Option<String>,

    /// Keyword to anchor on (case-insensitive prefix match)
    #[arg(short, long)]
    keyword: Option<String>,

    /// Keyword position relative to the number
    #[arg(short, long, value_enum, requires = "keyword")]
    position: Option<PositionArg>,

    /// Expected digit count of a valid reading
    #[arg(short, long)]
    digits: Option<u32>,

    /// Number of fractional digits
    #[arg(long, default_value = "0")]
    decimals: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum PositionArg {
    /// Keyword appears before the number
    Before,
    /// Keyword appears after the number
    After,
}

impl From<PositionArg> for KeywordPosition {
    fn from(position: PositionArg) -> Self {
        match position {
            PositionArg::Before => KeywordPosition::Before,
            PositionArg::After => KeywordPosition::After,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text
    Text,
}

/// JSON payload for one scan.
#[derive(Serialize)]
struct ExtractOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<&'a str>,
    #[serde(flatten)]
    report: &'a ScanReport,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let (extractor_config, unit) = resolve_config(&args, config_path)?;
    extractor_config.validate()?;

    let tokens = read_tokens(&args.tokens)?;
    info!("Scanning {} tokens", tokens.len());

    let extractor = ValueExtractor::from_config(&extractor_config);
    let report = extractor.scan(&tokens);

    match args.format {
        OutputFormat::Json => {
            let output = ExtractOutput {
                source: args.source.as_deref(),
                unit: unit.as_deref(),
                report: &report,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => print_report(&report, unit.as_deref()),
    }

    Ok(())
}

/// Build the extractor shape from a configured source or from flags.
fn resolve_config(
    args: &ExtractArgs,
    config_path: Option<&str>,
) -> anyhow::Result<(ExtractorConfig, Option<String>)> {
    if let Some(name) = &args.source {
        let path = config_path
            .map(PathBuf::from)
            .unwrap_or_else(super::config::default_config_path);
        if !path.exists() {
            anyhow::bail!(
                "--source requires a config file; none found at {}",
                path.display()
            );
        }
        let config = MeterscanConfig::from_file(&path)?;
        let source = config.source(name)?;
        return Ok((source.extractor.clone(), source.unit_of_measurement.clone()));
    }

    let Some(expected_digits) = args.digits else {
        anyhow::bail!("either --source or --digits is required");
    };

    let mut config = ExtractorConfig::new(expected_digits, args.decimals);
    if let Some(keyword) = &args.keyword {
        // Keyword without a position falls back to a plain numeric scan,
        // same as leaving the keyword out.
        config.keyword = Some(keyword.clone());
        config.keyword_position = args.position.map(Into::into);
    }

    Ok((config, None))
}

fn print_report(report: &ScanReport, unit: Option<&str>) {
    for diagnostic in &report.diagnostics {
        eprintln!("{} {}", style("⚠").yellow(), diagnostic);
    }

    match report.value {
        Some(value) => match unit {
            Some(unit) => println!("{} {} {}", style("✓").green(), value, unit),
            None => println!("{} {}", style("✓").green(), value),
        },
        None => println!("{} no reading", style("✗").yellow()),
    }
}
