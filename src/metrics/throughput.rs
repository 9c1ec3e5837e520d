//! Latency and throughput calculations
//!
//! Turns a TTFT/ITL benchmark into per-GPU output token throughput

use serde::{Deserialize, Serialize};

use crate::models::Benchmark;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Time to fully produce one request: TTFT + ITL * output length, in seconds
pub fn e2e_latency_secs(benchmark: &Benchmark, output_sequence_length: f64) -> f64 {
    benchmark.ttft_secs() + benchmark.itl_secs() * output_sequence_length
}

/// Output token throughput of a single GPU
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GpuThroughput {
    pub tokens_per_second: f64,
    pub tokens_per_hour: f64,
    pub millions_per_hour: f64,
}

impl GpuThroughput {
    /// Throughput with `concurrency` requests of `output_sequence_length`
    /// tokens completing every `e2e_latency_secs`
    pub fn new(output_sequence_length: f64, concurrency: f64, e2e_latency_secs: f64) -> Self {
        let tokens_per_batch = output_sequence_length * concurrency;
        let tokens_per_second = tokens_per_batch / e2e_latency_secs;

        Self {
            tokens_per_second,
            tokens_per_hour: tokens_per_second * SECONDS_PER_HOUR,
            millions_per_hour: (tokens_per_batch * SECONDS_PER_HOUR)
                / (e2e_latency_secs * 1_000_000.0),
        }
    }
}

/// Wall-clock hours to generate `monthly_output_tokens` in batches of
/// `output_sequence_length * concurrency` tokens
pub fn time_taken_hours(
    monthly_output_tokens: f64,
    output_sequence_length: f64,
    concurrency: f64,
    e2e_latency_secs: f64,
) -> f64 {
    let batches = monthly_output_tokens / (output_sequence_length * concurrency);
    (batches * e2e_latency_secs) / SECONDS_PER_HOUR
}
