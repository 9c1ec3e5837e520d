//! Export module for text, CSV and JSON output
//!
//! Formats calculation results for display. Nothing is written to disk;
//! output goes to whatever writer the host supplies.

pub mod csv_export;
pub mod json_export;
pub mod text_report;

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::models::CalculationResult;
use crate::CommandError;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ExportFormat::Text),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(CommandError::Export(format!(
                "Invalid export format: {}. Use 'text', 'csv' or 'json'",
                s
            ))),
        }
    }
}

/// Flat result record for CSV
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportableResult {
    pub scenario: String,
    pub gpus_needed: u32,
    pub using_front_office_units: bool,
    pub total_cost: f64,
    pub time_taken_hours: f64,
    pub e2e_latency_secs: f64,
    pub hours_per_day: f64,
    pub concurrency: f64,
    pub throughput_millions_per_hour: f64,
    pub monthly_output_tokens: f64,
    pub monthly_input_tokens: Option<f64>,
    pub calls_per_hour: Option<f64>,
    pub alternative_monthly_cost: Option<f64>,
    pub monthly_savings: Option<f64>,
    pub savings_pct: Option<f64>,
}

impl From<&CalculationResult> for ExportableResult {
    fn from(result: &CalculationResult) -> Self {
        let comparison = result.comparison.as_ref();
        Self {
            scenario: result.scenario.label().to_string(),
            gpus_needed: result.gpus_needed,
            using_front_office_units: result.using_upstream_units,
            total_cost: result.total_cost,
            time_taken_hours: result.time_taken_hours,
            e2e_latency_secs: result.e2e_latency_secs,
            hours_per_day: result.hours_per_day,
            concurrency: result.concurrency,
            throughput_millions_per_hour: result.throughput_millions_per_hour,
            monthly_output_tokens: result.monthly_output_tokens,
            monthly_input_tokens: result.volumes.as_ref().map(|v| v.monthly_input_tokens),
            calls_per_hour: result.volumes.as_ref().map(|v| v.calls_per_hour),
            alternative_monthly_cost: comparison.map(|c| c.alternative.monthly),
            monthly_savings: comparison.map(|c| c.savings.monthly),
            savings_pct: comparison.and_then(|c| c.savings_pct),
        }
    }
}

/// Write results in the requested format
pub fn write_results<W: Write>(
    results: &[CalculationResult],
    format: ExportFormat,
    writer: W,
) -> Result<(), CommandError> {
    match format {
        ExportFormat::Text => text_report::write_report(results, writer),
        ExportFormat::Csv => {
            let rows: Vec<ExportableResult> = results.iter().map(ExportableResult::from).collect();
            csv_export::write_results_csv(&rows, writer)
        }
        ExportFormat::Json => json_export::write_results_json(results, writer),
    }
}
