//! Benchmark preset and case studies
//!
//! The calculator ships with a single hardware profile: LLAMA 3.3 70B NIM
//! on an H200. Forms start pre-filled with these values.

use serde::Serialize;

use crate::parser::{BackOfficeForm, FrontOfficeForm};

/// Published benchmark figures for one model on one GPU
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkProfile {
    pub model: &'static str,
    pub gpu: &'static str,
    pub ttft_ms: f64,
    pub itl_ms: f64,
    pub gpu_hourly_rate: f64,
    /// Simultaneous requests per GPU for batch work
    pub batch_concurrency: f64,
    /// Output tokens per batch request
    pub batch_output_seq_length: f64,
}

impl BenchmarkProfile {
    pub fn display_name(&self) -> String {
        format!("{} on {}", self.model, self.gpu)
    }
}

/// LLAMA 3.3 70B NIM on H200
pub fn h200_llama_70b() -> BenchmarkProfile {
    BenchmarkProfile {
        model: "LLAMA 3.3 70B NIM",
        gpu: "H200",
        ttft_ms: 296.0,
        itl_ms: 53.0,
        gpu_hourly_rate: 35.0,
        batch_concurrency: 200.0,
        batch_output_seq_length: 30.0,
    }
}

/// Default front office operating window
pub const DEFAULT_START_HOUR: i32 = 9;
pub const DEFAULT_END_HOUR: i32 = 17;

/// Enterprise call center: 1,000 calls a day, 9:00 to 17:00
pub fn call_center_case_study() -> FrontOfficeForm {
    FrontOfficeForm {
        calls_per_day: "1000".to_string(),
        avg_call_duration_minutes: "5".to_string(),
        turns_per_call: "10".to_string(),
        input_tokens_per_turn: "100".to_string(),
        output_tokens_per_turn: "150".to_string(),
        ..FrontOfficeForm::default()
    }
}

/// Document pipeline: 10,000 contracts summarized to 512 tokens each
pub fn document_pipeline_case_study() -> BackOfficeForm {
    let contracts = 10_000.0;
    let summary_tokens = 512.0;

    BackOfficeForm {
        monthly_output_tokens: (contracts * summary_tokens).to_string(),
        ..BackOfficeForm::default()
    }
}
