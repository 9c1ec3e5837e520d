//! Plain text report
//!
//! Terminal rendering of the result cards.

use std::fmt::Write as _;
use std::io::Write;

use crate::models::{CalculationResult, CostComparison};
use crate::CommandError;

const RULE: &str = "═══════════════════════════════════════════════════════════════";
const THIN_RULE: &str = "───────────────────────────────────────────────────────────────";

/// Group thousands with commas
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    let digits = format!("{:.0}", n.abs());
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if n < 0.0 && digits != "0" {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Dollars with grouped thousands and cents
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${}", amount);
    }
    let cents = format!("{:.2}", amount.abs());
    let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
    let sign = if amount < 0.0 && cents != "0.00" { "-" } else { "" };
    let whole: f64 = whole.parse().unwrap_or(0.0);
    format!("{}${}.{}", sign, format_number(whole), frac)
}

/// Token counts in millions, e.g. `45.00M`
pub fn format_millions(tokens: f64) -> String {
    format!("{:.2}M", tokens / 1_000_000.0)
}

fn render_comparison(out: &mut String, cmp: &CostComparison) {
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "PER-MINUTE COMPARISON ({} per minute, {} minutes/month)",
        format_currency(cmp.per_minute_rate),
        format_number(cmp.total_minutes_per_month)
    );
    let _ = writeln!(out, "{}", THIN_RULE);
    let _ = writeln!(
        out,
        "  {:<10} {:>16} {:>16} {:>16}",
        "Horizon", "Per-minute", "GPU", "Savings"
    );
    let rows = [
        ("Monthly", cmp.alternative.monthly, cmp.primary.monthly, cmp.savings.monthly),
        ("1 year", cmp.alternative.yearly, cmp.primary.yearly, cmp.savings.yearly),
        ("3 years", cmp.alternative.three_year, cmp.primary.three_year, cmp.savings.three_year),
        ("5 years", cmp.alternative.five_year, cmp.primary.five_year, cmp.savings.five_year),
    ];
    for (label, alternative, primary, savings) in rows {
        let _ = writeln!(
            out,
            "  {:<10} {:>16} {:>16} {:>16}",
            label,
            format_currency(alternative),
            format_currency(primary),
            format_currency(savings)
        );
    }
    match cmp.savings_pct {
        Some(pct) => {
            let _ = writeln!(out, "  Savings:   {:.1}%", pct);
        }
        None => {
            let _ = writeln!(out, "  Savings:   n/a (no per-minute cost)");
        }
    }
}

/// Render one result as a report block
pub fn render_result(result: &CalculationResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  {} GPU SIZING", result.scenario.label().to_uppercase());
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out);
    let source = if result.using_upstream_units {
        " (front office GPUs)"
    } else {
        ""
    };
    let _ = writeln!(out, "  GPUs needed:             {:>14}{}", result.gpus_needed, source);
    let _ = writeln!(
        out,
        "  Total cost:              {:>14} monthly",
        format_currency(result.total_cost)
    );
    let _ = writeln!(
        out,
        "  Processing time:         {:>14.2} hours",
        result.time_taken_hours
    );

    if let Some(volumes) = &result.volumes {
        let _ = writeln!(out);
        let _ = writeln!(out, "CALL CENTER");
        let _ = writeln!(out, "{}", THIN_RULE);
        let _ = writeln!(
            out,
            "  Peak concurrent calls:   {:>14}",
            format_number(volumes.concurrent_calls)
        );
        let _ = writeln!(
            out,
            "  Calls per hour:          {:>14}",
            format_number(volumes.calls_per_hour)
        );
        let _ = writeln!(
            out,
            "  Total turns per day:     {:>14}",
            format_number(volumes.total_turns_per_day)
        );
        let _ = writeln!(
            out,
            "  Monthly input tokens:    {:>14}",
            format_millions(volumes.monthly_input_tokens)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "PERFORMANCE");
    let _ = writeln!(out, "{}", THIN_RULE);
    let _ = writeln!(
        out,
        "  Response time:           {:>11.0} ms ({:.2} s)",
        result.response_time_ms, result.e2e_latency_secs
    );
    let _ = writeln!(
        out,
        "  Monthly output tokens:   {:>14}",
        format_millions(result.monthly_output_tokens)
    );
    let _ = writeln!(
        out,
        "  Available hours:         {:>14} per day",
        result.hours_per_day
    );
    let _ = writeln!(
        out,
        "  Throughput:              {:>14.2} M tokens/hour/GPU",
        result.throughput_millions_per_hour
    );
    let _ = writeln!(
        out,
        "  GPU concurrency:         {:>14} requests/GPU",
        result.concurrency
    );

    if let Some(cmp) = &result.comparison {
        render_comparison(&mut out, cmp);
    }

    let _ = writeln!(out);
    out
}

/// Write every result as a text report
pub fn write_report<W: Write>(
    results: &[CalculationResult],
    mut writer: W,
) -> Result<(), CommandError> {
    for result in results {
        writer
            .write_all(render_result(result).as_bytes())
            .map_err(|e| CommandError::Export(format!("Failed to write report: {}", e)))?;
    }
    Ok(())
}
