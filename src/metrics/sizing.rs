//! GPU sizing engine
//!
//! Derives GPU count, processing time and cost from a [`CalculationInput`].
//! Pure: the same input always yields the same result.

use super::cost::{compare_costs, demand_gpus, fleet_cost, with_minimum};
use super::hours::{available_hours, HOURS_PER_DAY};
use super::throughput::{e2e_latency_secs, time_taken_hours, GpuThroughput};
use super::tokens::{
    activity_volumes, effective_concurrency, monthly_call_minutes, monthly_output_tokens,
};
use crate::models::{
    CalculationInput, CalculationResult, CostComparison, OperatingWindow, Workload,
    WorkloadVolumes,
};

/// Per-request shape of the workload on one GPU
struct RequestShape {
    output_sequence_length: f64,
    concurrency: f64,
    volumes: Option<WorkloadVolumes>,
}

fn request_shape(input: &CalculationInput) -> RequestShape {
    match &input.workload {
        Workload::TokenVolume {
            concurrency,
            output_sequence_length,
            ..
        } => RequestShape {
            output_sequence_length: *output_sequence_length,
            concurrency: *concurrency,
            volumes: None,
        },
        Workload::Activity(profile) => {
            // Calls arrive over the scenario's own window, whatever the fleet reuses
            let hours_per_day = input
                .window
                .as_ref()
                .map(OperatingWindow::hours_per_day)
                .unwrap_or(HOURS_PER_DAY);
            let volumes = activity_volumes(profile, hours_per_day);

            RequestShape {
                output_sequence_length: profile.output_tokens_per_turn,
                concurrency: effective_concurrency(volumes.concurrent_calls),
                volumes: Some(volumes),
            }
        }
    }
}

fn comparison(input: &CalculationInput, total_cost: f64) -> Option<CostComparison> {
    let rate = input.pricing.per_minute_rate?;
    match &input.workload {
        Workload::Activity(profile) => Some(compare_costs(
            monthly_call_minutes(profile),
            rate,
            total_cost,
        )),
        Workload::TokenVolume { .. } => {
            tracing::warn!("Per-minute comparison needs call volumes; skipping for token-volume workload");
            None
        }
    }
}

/// Run the full sizing derivation for one scenario
pub fn calculate(input: &CalculationInput) -> CalculationResult {
    let shape = request_shape(input);
    let monthly_tokens = monthly_output_tokens(&input.workload);

    let e2e = e2e_latency_secs(&input.benchmark, shape.output_sequence_length);
    let throughput = GpuThroughput::new(shape.output_sequence_length, shape.concurrency, e2e);
    let hours = available_hours(input.window.as_ref(), input.upstream.as_ref());

    tracing::debug!(
        "{}: e2e={:.3}s concurrency={} tokens/h/gpu={:.0} hours/month={}",
        input.scenario.label(),
        e2e,
        shape.concurrency,
        throughput.tokens_per_hour,
        hours.per_month
    );

    let (gpus_needed, raw_gpus) = match &input.upstream {
        Some(upstream) => (with_minimum(upstream.units), None),
        None => {
            let raw = demand_gpus(monthly_tokens, throughput.tokens_per_hour, hours.per_month);
            (with_minimum(raw), Some(raw))
        }
    };

    let time_taken = time_taken_hours(
        monthly_tokens,
        shape.output_sequence_length,
        shape.concurrency,
        e2e,
    );
    let total_cost = fleet_cost(gpus_needed, time_taken, input.pricing.gpu_hourly_rate);

    if !total_cost.is_finite() {
        tracing::warn!(
            "{}: cost is not finite ({}); check latency and window inputs",
            input.scenario.label(),
            total_cost
        );
    }

    CalculationResult {
        scenario: input.scenario,
        gpus_needed,
        raw_gpus,
        time_taken_hours: time_taken,
        total_cost,
        e2e_latency_secs: e2e,
        response_time_ms: e2e * 1000.0,
        hours_per_day: hours.per_day,
        hours_per_month: hours.per_month,
        concurrency: shape.concurrency,
        tokens_per_second_per_gpu: throughput.tokens_per_second,
        tokens_per_hour_per_gpu: throughput.tokens_per_hour,
        throughput_millions_per_hour: throughput.millions_per_hour,
        monthly_output_tokens: monthly_tokens,
        volumes: shape.volumes,
        using_upstream_units: input.upstream.is_some(),
        comparison: comparison(input, total_cost),
    }
}
