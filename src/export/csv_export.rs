//! CSV export functionality
//!
//! One row per calculation result, headers from the record fields.

use std::io::Write;

use csv::Writer;

use super::ExportableResult;
use crate::CommandError;

/// Write result rows as CSV
pub fn write_results_csv<W: Write>(
    rows: &[ExportableResult],
    writer: W,
) -> Result<(), CommandError> {
    let mut writer = Writer::from_writer(writer);

    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| CommandError::Export(format!("Failed to write CSV record: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| CommandError::Export(format!("Failed to flush CSV: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_row() -> ExportableResult {
        ExportableResult {
            scenario: "Back Office".to_string(),
            gpus_needed: 6,
            using_front_office_units: true,
            total_cost: 1234.5,
            time_taken_hours: 5.25,
            e2e_latency_secs: 1.886,
            hours_per_day: 16.0,
            concurrency: 200.0,
            throughput_millions_per_hour: 11.45,
            monthly_output_tokens: 5e9,
            monthly_input_tokens: None,
            calls_per_hour: None,
            alternative_monthly_cost: None,
            monthly_savings: None,
            savings_pct: None,
        }
    }

    #[test]
    fn test_write_results_csv() {
        let mut buffer = Vec::new();
        write_results_csv(&[create_test_row()], &mut buffer).unwrap();

        let content = String::from_utf8(buffer).unwrap();
        let mut lines = content.lines();

        let header = lines.next().unwrap();
        assert!(header.starts_with("scenario,gpus_needed,using_front_office_units,total_cost"));
        assert!(header.ends_with("savings_pct"));

        let row = lines.next().unwrap();
        assert!(row.starts_with("Back Office,6,true,1234.5"));
        assert!(row.ends_with(",,,,"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_write_empty_csv() {
        let mut buffer = Vec::new();
        write_results_csv(&[], &mut buffer).unwrap();
        assert!(buffer.is_empty());
    }
}
