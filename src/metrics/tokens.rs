//! Token volume utilities
//!
//! Normalizes a workload to monthly token volumes and derives the
//! concurrency a call center puts on each GPU

use crate::models::{ActivityProfile, Workload, WorkloadVolumes};

/// Billing month length used for every monthly figure
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Monthly output tokens the workload must generate
pub fn monthly_output_tokens(workload: &Workload) -> f64 {
    match workload {
        Workload::TokenVolume {
            monthly_output_tokens,
            ..
        } => *monthly_output_tokens,
        Workload::Activity(profile) => {
            total_turns_per_day(profile) * profile.output_tokens_per_turn * DAYS_PER_MONTH
        }
    }
}

/// Total conversational turns handled per day
pub fn total_turns_per_day(profile: &ActivityProfile) -> f64 {
    profile.calls_per_day * profile.turns_per_call
}

/// Peak simultaneous calls for calls spread evenly over the operating hours
pub fn concurrent_calls(calls_per_hour: f64, avg_call_duration_minutes: f64) -> f64 {
    ((calls_per_hour * avg_call_duration_minutes) / 60.0).ceil()
}

/// Requests in flight per GPU: one turn per live call, never below 1
pub fn effective_concurrency(concurrent_calls: f64) -> f64 {
    concurrent_calls.max(1.0)
}

/// Derive daily and monthly volumes for a call center profile
pub fn activity_volumes(profile: &ActivityProfile, hours_per_day: f64) -> WorkloadVolumes {
    let turns = total_turns_per_day(profile);
    let calls_per_hour = profile.calls_per_day / hours_per_day;

    WorkloadVolumes {
        total_turns_per_day: turns,
        calls_per_hour,
        concurrent_calls: concurrent_calls(calls_per_hour, profile.avg_call_duration_minutes),
        monthly_input_tokens: turns * profile.input_tokens_per_turn * DAYS_PER_MONTH,
        monthly_output_tokens: turns * profile.output_tokens_per_turn * DAYS_PER_MONTH,
    }
}

/// Call minutes per month, the billing basis of per-minute pricing
pub fn monthly_call_minutes(profile: &ActivityProfile) -> f64 {
    profile.calls_per_day * profile.avg_call_duration_minutes * DAYS_PER_MONTH
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call_center() -> ActivityProfile {
        ActivityProfile {
            calls_per_day: 1000.0,
            avg_call_duration_minutes: 5.0,
            turns_per_call: 10.0,
            input_tokens_per_turn: 100.0,
            output_tokens_per_turn: 150.0,
        }
    }

    #[test]
    fn test_activity_volumes() {
        let volumes = activity_volumes(&call_center(), 8.0);

        assert_eq!(volumes.total_turns_per_day, 10_000.0);
        assert_eq!(volumes.calls_per_hour, 125.0);
        // ceil(125 * 5 / 60) = ceil(10.41) = 11
        assert_eq!(volumes.concurrent_calls, 11.0);
        assert_eq!(volumes.monthly_output_tokens, 45_000_000.0);
        assert_eq!(volumes.monthly_input_tokens, 30_000_000.0);
    }

    #[test]
    fn test_monthly_output_tokens_both_modes() {
        let direct = Workload::TokenVolume {
            monthly_output_tokens: 5_000_000_000.0,
            concurrency: 200.0,
            output_sequence_length: 30.0,
        };
        assert_eq!(monthly_output_tokens(&direct), 5_000_000_000.0);

        let activity = Workload::Activity(call_center());
        assert_eq!(monthly_output_tokens(&activity), 45_000_000.0);
    }

    #[test]
    fn test_concurrency_floor() {
        // A trickle of short calls still needs one slot
        let calls = concurrent_calls(0.0, 5.0);
        assert_eq!(calls, 0.0);
        assert_eq!(effective_concurrency(calls), 1.0);
        assert_eq!(effective_concurrency(11.0), 11.0);
    }

    #[test]
    fn test_concurrent_calls_exact_boundary() {
        // 120 calls/hour * 5 min / 60 = exactly 10
        assert_eq!(concurrent_calls(120.0, 5.0), 10.0);
    }

    #[test]
    fn test_monthly_call_minutes() {
        assert_eq!(monthly_call_minutes(&call_center()), 150_000.0);
    }
}
