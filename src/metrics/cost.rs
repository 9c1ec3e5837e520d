//! Cost calculation utilities
//!
//! GPU count, fleet cost, and the comparison against per-minute pricing

use crate::models::{CostComparison, CostHorizons};

/// Smallest fleet ever quoted
pub const MIN_GPUS: u32 = 4;

/// Apply the minimum fleet size
pub fn with_minimum(gpus: u32) -> u32 {
    gpus.max(MIN_GPUS)
}

/// GPUs needed to generate the monthly volume within the available hours.
///
/// Rounds up; an exact fit needs no extra GPU. Degenerate inputs saturate
/// (NaN becomes 0, infinity becomes `u32::MAX`).
pub fn demand_gpus(
    monthly_output_tokens: f64,
    tokens_per_hour_per_gpu: f64,
    hours_per_month: f64,
) -> u32 {
    let tokens_per_month_per_gpu = tokens_per_hour_per_gpu * hours_per_month;
    (monthly_output_tokens / tokens_per_month_per_gpu).ceil() as u32
}

/// Fleet cost for the hours it spends generating the workload
pub fn fleet_cost(gpus: u32, time_taken_hours: f64, gpu_hourly_rate: f64) -> f64 {
    gpus as f64 * time_taken_hours * gpu_hourly_rate
}

/// Savings as a share of the alternative cost, `None` when that cost is zero
pub fn savings_pct(alternative_monthly: f64, primary_monthly: f64) -> Option<f64> {
    if alternative_monthly == 0.0 {
        None
    } else {
        Some((alternative_monthly - primary_monthly) / alternative_monthly * 100.0)
    }
}

/// Compare the GPU monthly cost against per-minute billing of the same calls
pub fn compare_costs(
    total_minutes_per_month: f64,
    per_minute_rate: f64,
    primary_monthly: f64,
) -> CostComparison {
    let alternative = CostHorizons::from_monthly(total_minutes_per_month * per_minute_rate);
    let primary = CostHorizons::from_monthly(primary_monthly);

    CostComparison {
        per_minute_rate,
        total_minutes_per_month,
        savings: alternative.minus(&primary),
        savings_pct: savings_pct(alternative.monthly, primary.monthly),
        alternative,
        primary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_fleet() {
        assert_eq!(with_minimum(0), 4);
        assert_eq!(with_minimum(1), 4);
        assert_eq!(with_minimum(4), 4);
        assert_eq!(with_minimum(9), 9);
    }

    #[test]
    fn test_demand_gpus_rounds_up() {
        // 1000 tokens/h * 100 h = 100k tokens per GPU
        assert_eq!(demand_gpus(250_000.0, 1_000.0, 100.0), 3);
        assert_eq!(demand_gpus(1.0, 1_000.0, 100.0), 1);
    }

    #[test]
    fn test_demand_gpus_exact_division() {
        assert_eq!(demand_gpus(700_000.0, 1_000.0, 100.0), 7);
    }

    #[test]
    fn test_demand_gpus_degenerate() {
        assert_eq!(demand_gpus(100.0, 0.0, 100.0), u32::MAX);
        assert_eq!(demand_gpus(0.0, 0.0, 100.0), 0);
        assert_eq!(with_minimum(demand_gpus(0.0, 0.0, 100.0)), MIN_GPUS);
    }

    #[test]
    fn test_fleet_cost() {
        // 4 GPUs * 10 h * $35
        assert!((fleet_cost(4, 10.0, 35.0) - 1_400.0).abs() < 1e-9);
    }

    #[test]
    fn test_compare_costs() {
        // 150k minutes at $0.10 = $15,000/month vs $5,000 on GPUs
        let cmp = compare_costs(150_000.0, 0.10, 5_000.0);

        assert!((cmp.alternative.monthly - 15_000.0).abs() < 1e-6);
        assert!((cmp.alternative.yearly - 180_000.0).abs() < 1e-6);
        assert!((cmp.primary.three_year - 180_000.0).abs() < 1e-6);
        assert!((cmp.savings.monthly - 10_000.0).abs() < 1e-6);
        assert!((cmp.savings.five_year - 600_000.0).abs() < 1e-6);

        let pct = cmp.savings_pct.unwrap();
        assert!((pct - 66.666_666).abs() < 0.001);
    }

    #[test]
    fn test_savings_pct_at_parity_is_zero() {
        let cmp = compare_costs(1_000.0, 2.0, 2_000.0);
        assert_eq!(cmp.savings_pct, Some(0.0));
        assert_eq!(cmp.savings.five_year, 0.0);
    }

    #[test]
    fn test_savings_pct_without_baseline() {
        assert_eq!(savings_pct(0.0, 100.0), None);
        // GPU cost above the alternative gives negative savings
        assert_eq!(savings_pct(100.0, 150.0), Some(-50.0));
    }
}
