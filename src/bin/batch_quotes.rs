//! Batch repayment quotes from a CSV of loan scenarios
//!
//! Reads one scenario per row, runs the quotes in parallel (the engine is
//! pure, so rows never interact), and writes a results CSV alongside any
//! per-row validation messages.
//!
//! Usage: batch_quotes [input.csv] [output.csv]

use anyhow::Context;
use mortgage_engine::engine::CalculatorEngine;
use mortgage_engine::request::{RepaymentRequest, RepaymentType};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// One scenario row from the input CSV
#[derive(Debug, Deserialize)]
struct ScenarioRow {
    loan_amount: f64,
    interest_rate: f64,
    term_years: u32,
    #[serde(default)]
    overpayment: f64,
    #[serde(default = "default_repayment_type")]
    repayment_type: String,
}

fn default_repayment_type() -> String {
    "repayment".to_string()
}

impl ScenarioRow {
    fn to_request(&self) -> anyhow::Result<RepaymentRequest> {
        let repayment_type = match self.repayment_type.as_str() {
            "repayment" => RepaymentType::Repayment,
            "interest-only" => RepaymentType::InterestOnly,
            other => anyhow::bail!("Unknown repayment_type: {}", other),
        };

        Ok(RepaymentRequest {
            loan_amount: self.loan_amount,
            interest_rate: self.interest_rate,
            term_years: self.term_years,
            overpayment: self.overpayment,
            repayment_type,
        })
    }
}

/// One output row: the scenario echoed back plus the quote (or the
/// validation message when the scenario was rejected)
#[derive(Debug, Serialize)]
struct QuoteRow {
    loan_amount: f64,
    interest_rate: f64,
    term_years: u32,
    overpayment: f64,
    monthly_payment: Option<f64>,
    total_paid: Option<f64>,
    total_interest: Option<f64>,
    overpayment_savings: Option<f64>,
    time_saved_months: Option<u32>,
    error: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let input = std::env::args().nth(1).unwrap_or_else(|| "quotes.csv".to_string());
    let output = std::env::args().nth(2).unwrap_or_else(|| "quote_results.csv".to_string());

    let start = Instant::now();
    log::info!("loading scenarios from {}", input);

    let mut reader = csv::Reader::from_path(&input)
        .with_context(|| format!("Failed to open {}", input))?;
    let scenarios: Vec<ScenarioRow> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .context("Malformed scenario row")?;

    log::info!("loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let engine = CalculatorEngine::default_uk();

    let rows: Vec<QuoteRow> = scenarios
        .par_iter()
        .map(|scenario| {
            let quote = scenario
                .to_request()
                .and_then(|request| engine.repayment(&request).map_err(Into::into));

            match quote {
                Ok(result) => QuoteRow {
                    loan_amount: scenario.loan_amount,
                    interest_rate: scenario.interest_rate,
                    term_years: scenario.term_years,
                    overpayment: scenario.overpayment,
                    monthly_payment: Some(result.monthly_payment),
                    total_paid: Some(result.total_paid),
                    total_interest: Some(result.total_interest),
                    overpayment_savings: Some(result.overpayment_savings),
                    time_saved_months: Some(result.time_saved_months),
                    error: None,
                },
                Err(err) => QuoteRow {
                    loan_amount: scenario.loan_amount,
                    interest_rate: scenario.interest_rate,
                    term_years: scenario.term_years,
                    overpayment: scenario.overpayment,
                    monthly_payment: None,
                    total_paid: None,
                    total_interest: None,
                    overpayment_savings: None,
                    time_saved_months: None,
                    error: Some(err.to_string()),
                },
            }
        })
        .collect();

    let mut writer = csv::Writer::from_path(&output)
        .with_context(|| format!("Failed to create {}", output))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let failures = rows.iter().filter(|r| r.error.is_some()).count();
    log::info!(
        "wrote {} quotes ({} rejected) to {} in {:?}",
        rows.len(),
        failures,
        output,
        start.elapsed()
    );
    println!("{} quotes written to {}", rows.len(), output);

    Ok(())
}
