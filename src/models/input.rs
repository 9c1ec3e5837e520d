//! Calculation input types
//!
//! Immutable records built at the moment a calculation is requested

use serde::{Deserialize, Serialize};

/// Which side of the deal a calculation sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Real-time customer interactions during business hours
    FrontOffice,
    /// Batch workloads, optionally on front office GPUs during off hours
    BackOffice,
}

impl Scenario {
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::FrontOffice => "Front Office",
            Scenario::BackOffice => "Back Office",
        }
    }
}

/// How the monthly workload is described
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Workload {
    /// Monthly output token target with explicit benchmark concurrency
    TokenVolume {
        monthly_output_tokens: f64,
        concurrency: f64,
        output_sequence_length: f64,
    },
    /// Call center activity from which volumes and concurrency are derived
    Activity(ActivityProfile),
}

/// Business-activity descriptors for a call center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityProfile {
    pub calls_per_day: f64,
    pub avg_call_duration_minutes: f64,
    pub turns_per_call: f64,
    pub input_tokens_per_turn: f64,
    pub output_tokens_per_turn: f64,
}

/// Latency benchmark for one GPU, in milliseconds as published
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    pub ttft_ms: f64,
    pub itl_ms: f64,
}

impl Benchmark {
    pub fn ttft_secs(&self) -> f64 {
        self.ttft_ms / 1000.0
    }

    pub fn itl_secs(&self) -> f64 {
        self.itl_ms / 1000.0
    }
}

/// Daily operating window in 24-hour clock hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingWindow {
    pub start_hour: i32,
    pub end_hour: i32,
}

impl OperatingWindow {
    pub fn new(start_hour: i32, end_hour: i32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Hours per day covered by the window. Not clamped: a reversed window
    /// yields a negative count.
    pub fn hours_per_day(&self) -> f64 {
        (self.end_hour - self.start_hour) as f64
    }
}

/// GPU pricing and the optional per-minute alternative
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    /// Cost per GPU-hour
    pub gpu_hourly_rate: f64,
    /// Cost per call minute under the alternative model
    pub per_minute_rate: Option<f64>,
}

/// Units and window produced by an earlier front office calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpstreamAllocation {
    pub units: u32,
    pub window: OperatingWindow,
}

/// Everything the derivation engine needs for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub scenario: Scenario,
    pub workload: Workload,
    pub benchmark: Benchmark,
    /// Own operating window; `None` means the workload may run around the clock
    pub window: Option<OperatingWindow>,
    pub pricing: Pricing,
    /// Reuse another scenario's allocation instead of sizing independently
    pub upstream: Option<UpstreamAllocation>,
}

impl CalculationInput {
    /// Attach (or clear) the upstream allocation
    pub fn with_upstream(mut self, upstream: Option<UpstreamAllocation>) -> Self {
        self.upstream = upstream;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_hours() {
        assert_eq!(OperatingWindow::new(9, 17).hours_per_day(), 8.0);
        assert_eq!(OperatingWindow::new(0, 23).hours_per_day(), 23.0);
        // Reversed windows are passed through unclamped
        assert_eq!(OperatingWindow::new(17, 9).hours_per_day(), -8.0);
    }

    #[test]
    fn test_benchmark_seconds() {
        let bench = Benchmark {
            ttft_ms: 296.0,
            itl_ms: 53.0,
        };
        assert!((bench.ttft_secs() - 0.296).abs() < 1e-12);
        assert!((bench.itl_secs() - 0.053).abs() < 1e-12);
    }

    #[test]
    fn test_workload_serializes_with_mode_tag() {
        let workload = Workload::TokenVolume {
            monthly_output_tokens: 1_000_000.0,
            concurrency: 200.0,
            output_sequence_length: 30.0,
        };
        let json = serde_json::to_value(&workload).unwrap();
        assert_eq!(json["mode"], "token_volume");
        assert_eq!(json["concurrency"], 200.0);
    }
}
