//! Calculation result types
//!
//! Output records for one sizing run, including the optional cost comparison

use serde::{Deserialize, Serialize};

use super::input::Scenario;

/// Volumes derived from business-activity descriptors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadVolumes {
    pub total_turns_per_day: f64,
    pub calls_per_hour: f64,
    /// Peak simultaneous calls before the concurrency floor of 1
    pub concurrent_calls: f64,
    pub monthly_input_tokens: f64,
    pub monthly_output_tokens: f64,
}

/// A cost projected over the standard contract horizons
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostHorizons {
    pub monthly: f64,
    pub yearly: f64,
    pub three_year: f64,
    pub five_year: f64,
}

impl CostHorizons {
    /// Project a monthly figure to 1, 3 and 5 years
    pub fn from_monthly(monthly: f64) -> Self {
        let yearly = monthly * 12.0;
        Self {
            monthly,
            yearly,
            three_year: yearly * 3.0,
            five_year: yearly * 5.0,
        }
    }

    /// Difference `self - other` at every horizon
    pub fn minus(&self, other: &CostHorizons) -> Self {
        Self {
            monthly: self.monthly - other.monthly,
            yearly: self.yearly - other.yearly,
            three_year: self.three_year - other.three_year,
            five_year: self.five_year - other.five_year,
        }
    }
}

/// GPU cost against per-minute pricing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostComparison {
    pub per_minute_rate: f64,
    pub total_minutes_per_month: f64,
    pub alternative: CostHorizons,
    pub primary: CostHorizons,
    /// Alternative minus primary; positive means GPUs are cheaper
    pub savings: CostHorizons,
    /// `None` when the alternative monthly cost is zero
    pub savings_pct: Option<f64>,
}

/// Output of the derivation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub scenario: Scenario,
    pub gpus_needed: u32,
    /// Demand-derived count before the minimum; absent when reusing upstream units
    pub raw_gpus: Option<u32>,
    pub time_taken_hours: f64,
    pub total_cost: f64,
    pub e2e_latency_secs: f64,
    pub response_time_ms: f64,
    pub hours_per_day: f64,
    pub hours_per_month: f64,
    pub concurrency: f64,
    pub tokens_per_second_per_gpu: f64,
    pub tokens_per_hour_per_gpu: f64,
    /// Million output tokens per hour per GPU
    pub throughput_millions_per_hour: f64,
    pub monthly_output_tokens: f64,
    pub volumes: Option<WorkloadVolumes>,
    pub using_upstream_units: bool,
    pub comparison: Option<CostComparison>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizons_from_monthly() {
        let h = CostHorizons::from_monthly(1_000.0);
        assert_eq!(h.yearly, 12_000.0);
        assert_eq!(h.three_year, 36_000.0);
        assert_eq!(h.five_year, 60_000.0);
    }

    #[test]
    fn test_horizons_minus() {
        let alt = CostHorizons::from_monthly(1_500.0);
        let gpu = CostHorizons::from_monthly(500.0);
        let diff = alt.minus(&gpu);

        assert_eq!(diff.monthly, 1_000.0);
        assert_eq!(diff.yearly, 12_000.0);
        assert_eq!(diff.five_year, 60_000.0);
    }
}
