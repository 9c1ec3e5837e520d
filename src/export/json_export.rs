//! JSON export functionality
//!
//! Full result structure wrapped in an envelope with export metadata.

use std::io::Write;

use serde::Serialize;

use crate::models::CalculationResult;
use crate::presets::h200_llama_70b;
use crate::CommandError;

/// Complete export structure for JSON
#[derive(Debug, Clone, Serialize)]
pub struct ResultsExportJson<'a> {
    pub export_date: String,
    pub export_version: &'static str,
    pub benchmark: String,
    pub total_results: usize,
    pub results: &'a [CalculationResult],
    pub summary: ExportSummary,
}

/// Totals across all exported scenarios
#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub total_monthly_cost: f64,
    /// Largest fleet across scenarios; shared GPUs are not double counted
    pub peak_gpus: u32,
}

const EXPORT_VERSION: &str = "1.0.0";

fn summarize(results: &[CalculationResult]) -> ExportSummary {
    ExportSummary {
        total_monthly_cost: results.iter().map(|r| r.total_cost).sum(),
        peak_gpus: results.iter().map(|r| r.gpus_needed).max().unwrap_or(0),
    }
}

/// Write results as pretty-printed JSON
pub fn write_results_json<W: Write>(
    results: &[CalculationResult],
    mut writer: W,
) -> Result<(), CommandError> {
    let export = ResultsExportJson {
        export_date: chrono::Utc::now().to_rfc3339(),
        export_version: EXPORT_VERSION,
        benchmark: h200_llama_70b().display_name(),
        total_results: results.len(),
        results,
        summary: summarize(results),
    };

    let json = serde_json::to_string_pretty(&export)
        .map_err(|e| CommandError::Export(format!("Failed to serialize JSON: {}", e)))?;

    writeln!(writer, "{}", json)
        .map_err(|e| CommandError::Export(format!("Failed to write JSON: {}", e)))?;

    Ok(())
}
