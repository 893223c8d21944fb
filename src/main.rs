//! Mortgage Engine CLI
//!
//! Runs a single calculation from a JSON field map and prints the result
//! record as JSON. Validation failures exit with status 2 and the
//! user-facing message on stderr.

use anyhow::Context;
use clap::Parser;
use mortgage_engine::{CalculatorEngine, EngineError, FieldMap, LendingCriteria, RateSnapshot};
use std::io::Read;
use std::path::PathBuf;

/// UK mortgage calculator
#[derive(Debug, Parser)]
#[command(name = "mortgage_engine", version)]
struct Cli {
    /// Calculator kind: affordability, repayment, remortgage, or valuation
    kind: String,

    /// Form fields as a JSON object, e.g. '{"loan_amount": 300000, "interest_rate": 3.5, "term_years": 25}'
    #[arg(long)]
    fields: Option<String>,

    /// Read the JSON field map from a file instead (use '-' for stdin)
    #[arg(long, conflicts_with = "fields")]
    fields_file: Option<PathBuf>,

    /// Override the standard variable rate used as the stress-test reference, as a percentage
    #[arg(long)]
    reference_rate: Option<f64>,
}

fn read_fields(cli: &Cli) -> anyhow::Result<FieldMap> {
    let json = match (&cli.fields, &cli.fields_file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) if path.as_os_str() == "-" => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read field map from stdin")?;
            buffer
        }
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read field map from {}", path.display()))?,
        (None, None) => "{}".to_string(),
    };

    serde_json::from_str(&json).context("Field map must be a JSON object of form fields")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let fields = read_fields(&cli)?;

    let mut criteria = LendingCriteria::default_uk();
    if let Some(rate_pct) = cli.reference_rate {
        criteria.rates = RateSnapshot::with_rate(rate_pct / 100.0);
    }

    log::info!(
        "running {} calculation with {} field(s)",
        cli.kind,
        fields.len()
    );

    let engine = CalculatorEngine::new(criteria);
    match engine.calculate_fields(&cli.kind, &fields) {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Err(err @ EngineError::Validation(_)) => {
            eprintln!("Invalid input: {}", err);
            std::process::exit(2);
        }
        Err(err) => Err(err.into()),
    }
}
