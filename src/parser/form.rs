//! Scenario form buffers
//!
//! Text exactly as entered by the user. Defaults mirror the pre-filled
//! benchmark values; business inputs start empty.

use serde::{Deserialize, Serialize};

use super::{Field, FieldReader, ValidationFailure};
use crate::models::{
    ActivityProfile, Benchmark, CalculationInput, OperatingWindow, Pricing, Scenario, Workload,
};
use crate::presets::{h200_llama_70b, DEFAULT_END_HOUR, DEFAULT_START_HOUR};

/// Front office (call center) inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontOfficeForm {
    pub calls_per_day: String,
    pub avg_call_duration_minutes: String,
    pub turns_per_call: String,
    pub input_tokens_per_turn: String,
    pub output_tokens_per_turn: String,
    pub start_hour: String,
    pub end_hour: String,
    pub ttft: String,
    pub itl: String,
    pub gpu_hourly_rate: String,
    /// Optional; enables the per-minute cost comparison
    pub per_minute_rate: String,
}

impl Default for FrontOfficeForm {
    fn default() -> Self {
        let profile = h200_llama_70b();
        Self {
            calls_per_day: String::new(),
            avg_call_duration_minutes: String::new(),
            turns_per_call: String::new(),
            input_tokens_per_turn: String::new(),
            output_tokens_per_turn: String::new(),
            start_hour: DEFAULT_START_HOUR.to_string(),
            end_hour: DEFAULT_END_HOUR.to_string(),
            ttft: profile.ttft_ms.to_string(),
            itl: profile.itl_ms.to_string(),
            gpu_hourly_rate: profile.gpu_hourly_rate.to_string(),
            per_minute_rate: String::new(),
        }
    }
}

impl FrontOfficeForm {
    /// Build an immutable input from the current buffer
    pub fn parse(&self) -> Result<CalculationInput, ValidationFailure> {
        let mut reader = FieldReader::default();

        let profile = ActivityProfile {
            calls_per_day: reader.number(Field::CallsPerDay, &self.calls_per_day),
            avg_call_duration_minutes: reader
                .number(Field::AvgCallDurationMinutes, &self.avg_call_duration_minutes),
            turns_per_call: reader.number(Field::TurnsPerCall, &self.turns_per_call),
            input_tokens_per_turn: reader
                .number(Field::InputTokensPerTurn, &self.input_tokens_per_turn),
            output_tokens_per_turn: reader
                .number(Field::OutputTokensPerTurn, &self.output_tokens_per_turn),
        };
        let window = OperatingWindow::new(
            reader.hour(Field::StartHour, &self.start_hour),
            reader.hour(Field::EndHour, &self.end_hour),
        );
        let benchmark = Benchmark {
            ttft_ms: reader.number(Field::Ttft, &self.ttft),
            itl_ms: reader.number(Field::Itl, &self.itl),
        };
        let pricing = Pricing {
            gpu_hourly_rate: reader.number(Field::GpuHourlyRate, &self.gpu_hourly_rate),
            per_minute_rate: reader.optional_number(Field::PerMinuteRate, &self.per_minute_rate),
        };

        reader.finish(CalculationInput {
            scenario: Scenario::FrontOffice,
            workload: Workload::Activity(profile),
            benchmark,
            window: Some(window),
            pricing,
            upstream: None,
        })
    }
}

/// Back office (batch) inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackOfficeForm {
    pub monthly_output_tokens: String,
    pub concurrency: String,
    pub output_seq_length: String,
    pub ttft: String,
    pub itl: String,
    pub gpu_hourly_rate: String,
    /// Reuse the latest front office GPUs during its off hours
    pub use_front_office_units: bool,
}

impl Default for BackOfficeForm {
    fn default() -> Self {
        let profile = h200_llama_70b();
        Self {
            monthly_output_tokens: String::new(),
            concurrency: profile.batch_concurrency.to_string(),
            output_seq_length: profile.batch_output_seq_length.to_string(),
            ttft: profile.ttft_ms.to_string(),
            itl: profile.itl_ms.to_string(),
            gpu_hourly_rate: profile.gpu_hourly_rate.to_string(),
            use_front_office_units: true,
        }
    }
}

impl BackOfficeForm {
    /// Build an immutable input from the current buffer. The upstream
    /// allocation is attached by the caller.
    pub fn parse(&self) -> Result<CalculationInput, ValidationFailure> {
        let mut reader = FieldReader::default();

        let workload = Workload::TokenVolume {
            monthly_output_tokens: reader
                .number(Field::MonthlyOutputTokens, &self.monthly_output_tokens),
            concurrency: reader.number(Field::Concurrency, &self.concurrency),
            output_sequence_length: reader.number(Field::OutputSeqLength, &self.output_seq_length),
        };
        let benchmark = Benchmark {
            ttft_ms: reader.number(Field::Ttft, &self.ttft),
            itl_ms: reader.number(Field::Itl, &self.itl),
        };
        let pricing = Pricing {
            gpu_hourly_rate: reader.number(Field::GpuHourlyRate, &self.gpu_hourly_rate),
            per_minute_rate: None,
        };

        reader.finish(CalculationInput {
            scenario: Scenario::BackOffice,
            workload,
            benchmark,
            window: None,
            pricing,
            upstream: None,
        })
    }
}

/// Either scenario's buffer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scenario", rename_all = "snake_case")]
pub enum ScenarioForm {
    FrontOffice(FrontOfficeForm),
    BackOffice(BackOfficeForm),
}
