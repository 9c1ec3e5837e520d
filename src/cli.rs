//! Command line surface
//!
//! Collects form text from flags and hands it to the command handlers.
//! Flags left out keep the pre-filled benchmark values.

use std::io;

use clap::{Args, Parser, Subcommand};

use crate::commands::{calculate_back_office, calculate_back_office_with, calculate_front_office};
use crate::export::{write_results, ExportFormat};
use crate::models::{CalculationResult, OperatingWindow, UpstreamAllocation};
use crate::parser::{BackOfficeForm, FrontOfficeForm};
use crate::presets::{call_center_case_study, document_pipeline_case_study};
use crate::session::AppState;
use crate::CommandError;

#[derive(Debug, Parser)]
#[command(
    name = "gpu-sizer",
    version,
    about = "Size GPU fleets for front office and back office LLM workloads (LLAMA 3.3 70B NIM on H200)"
)]
pub struct Cli {
    /// Output format: text, csv or json
    #[arg(long, global = true, default_value = "text")]
    pub format: ExportFormat,

    /// More log output (repeat for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Size a real-time call center during its operating hours
    FrontOffice {
        #[command(flatten)]
        calls: CallCenterArgs,
        #[command(flatten)]
        benchmark: BenchmarkArgs,
        /// Start from the enterprise call center case study
        #[arg(long)]
        case_study: bool,
    },
    /// Size a batch workload, optionally on front office GPUs after hours
    BackOffice {
        #[command(flatten)]
        batch: BatchArgs,
        #[command(flatten)]
        benchmark: BenchmarkArgs,
        #[command(flatten)]
        upstream: UpstreamArgs,
        /// Start from the document pipeline case study
        #[arg(long)]
        case_study: bool,
    },
    /// Size the front office, then the back office on the same GPUs
    Deal {
        #[command(flatten)]
        calls: CallCenterArgs,
        #[command(flatten)]
        batch: BatchArgs,
        #[command(flatten)]
        benchmark: BenchmarkArgs,
        /// Size the back office on its own fleet
        #[arg(long)]
        independent_back_office: bool,
        /// Start from both case studies
        #[arg(long)]
        case_study: bool,
    },
}

/// Call center descriptors
#[derive(Debug, Clone, Default, Args)]
pub struct CallCenterArgs {
    #[arg(long)]
    pub calls_per_day: Option<String>,
    #[arg(long)]
    pub avg_call_minutes: Option<String>,
    #[arg(long)]
    pub turns_per_call: Option<String>,
    #[arg(long)]
    pub input_tokens_per_turn: Option<String>,
    #[arg(long)]
    pub output_tokens_per_turn: Option<String>,
    /// Opening hour, 24-hour clock
    #[arg(long)]
    pub start_hour: Option<String>,
    /// Closing hour, 24-hour clock
    #[arg(long)]
    pub end_hour: Option<String>,
    /// Per-minute price to compare the GPU cost against
    #[arg(long)]
    pub per_minute_rate: Option<String>,
}

/// Batch workload descriptors
#[derive(Debug, Clone, Default, Args)]
pub struct BatchArgs {
    #[arg(long)]
    pub monthly_output_tokens: Option<String>,
    /// Simultaneous requests per GPU
    #[arg(long)]
    pub concurrency: Option<String>,
    /// Output tokens per request
    #[arg(long)]
    pub output_seq_length: Option<String>,
}

/// Benchmark overrides
#[derive(Debug, Clone, Default, Args)]
pub struct BenchmarkArgs {
    /// Time to first token, ms
    #[arg(long)]
    pub ttft_ms: Option<String>,
    /// Inter-token latency, ms
    #[arg(long)]
    pub itl_ms: Option<String>,
    /// GPU price per hour
    #[arg(long)]
    pub rate: Option<String>,
}

/// Front office allocation to reuse in a standalone back office run
#[derive(Debug, Clone, Default, Args)]
pub struct UpstreamArgs {
    #[arg(long, requires = "upstream_start_hour", requires = "upstream_end_hour")]
    pub upstream_units: Option<u32>,
    #[arg(long, requires = "upstream_units")]
    pub upstream_start_hour: Option<i32>,
    #[arg(long, requires = "upstream_units")]
    pub upstream_end_hour: Option<i32>,
}

impl UpstreamArgs {
    fn allocation(&self) -> Option<UpstreamAllocation> {
        match (self.upstream_units, self.upstream_start_hour, self.upstream_end_hour) {
            (Some(units), Some(start), Some(end)) => Some(UpstreamAllocation {
                units,
                window: OperatingWindow::new(start, end),
            }),
            _ => None,
        }
    }
}

fn set(target: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

impl BenchmarkArgs {
    fn apply(&self, ttft: &mut String, itl: &mut String, rate: &mut String) {
        set(ttft, &self.ttft_ms);
        set(itl, &self.itl_ms);
        set(rate, &self.rate);
    }
}

/// Fill a front office form from flags
pub fn front_office_form(
    calls: &CallCenterArgs,
    benchmark: &BenchmarkArgs,
    case_study: bool,
) -> FrontOfficeForm {
    let mut form = if case_study {
        call_center_case_study()
    } else {
        FrontOfficeForm::default()
    };

    set(&mut form.calls_per_day, &calls.calls_per_day);
    set(&mut form.avg_call_duration_minutes, &calls.avg_call_minutes);
    set(&mut form.turns_per_call, &calls.turns_per_call);
    set(&mut form.input_tokens_per_turn, &calls.input_tokens_per_turn);
    set(&mut form.output_tokens_per_turn, &calls.output_tokens_per_turn);
    set(&mut form.start_hour, &calls.start_hour);
    set(&mut form.end_hour, &calls.end_hour);
    set(&mut form.per_minute_rate, &calls.per_minute_rate);
    benchmark.apply(&mut form.ttft, &mut form.itl, &mut form.gpu_hourly_rate);

    form
}

/// Fill a back office form from flags
pub fn back_office_form(
    batch: &BatchArgs,
    benchmark: &BenchmarkArgs,
    use_front_office_units: bool,
    case_study: bool,
) -> BackOfficeForm {
    let mut form = if case_study {
        document_pipeline_case_study()
    } else {
        BackOfficeForm::default()
    };

    set(&mut form.monthly_output_tokens, &batch.monthly_output_tokens);
    set(&mut form.concurrency, &batch.concurrency);
    set(&mut form.output_seq_length, &batch.output_seq_length);
    benchmark.apply(&mut form.ttft, &mut form.itl, &mut form.gpu_hourly_rate);
    form.use_front_office_units = use_front_office_units;

    form
}

/// Run the parsed command and print its results
pub fn execute(cli: &Cli) -> Result<(), CommandError> {
    let state = AppState::new();

    let results: Vec<CalculationResult> = match &cli.command {
        Command::FrontOffice {
            calls,
            benchmark,
            case_study,
        } => vec![calculate_front_office(
            &state,
            &front_office_form(calls, benchmark, *case_study),
        )?],
        Command::BackOffice {
            batch,
            benchmark,
            upstream,
            case_study,
        } => {
            let allocation = upstream.allocation();
            let form = back_office_form(batch, benchmark, allocation.is_some(), *case_study);
            vec![calculate_back_office_with(&state, &form, allocation)?]
        }
        Command::Deal {
            calls,
            batch,
            benchmark,
            independent_back_office,
            case_study,
        } => {
            let front = calculate_front_office(
                &state,
                &front_office_form(calls, benchmark, *case_study),
            )?;
            let back = calculate_back_office(
                &state,
                &back_office_form(batch, benchmark, !independent_back_office, *case_study),
            )?;
            vec![front, back]
        }
    };

    write_results(&results, cli.format, io::stdout().lock())
}
