//! Hours-availability policy
//!
//! Decides how many hours per day and per month a scenario's GPUs can work

use serde::{Deserialize, Serialize};

use super::tokens::DAYS_PER_MONTH;
use crate::models::{OperatingWindow, UpstreamAllocation};

pub const HOURS_PER_DAY: f64 = 24.0;

/// Hours a GPU fleet is available to a scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvailableHours {
    pub per_day: f64,
    pub per_month: f64,
}

impl AvailableHours {
    pub fn from_daily(per_day: f64) -> Self {
        Self {
            per_day,
            per_month: per_day * DAYS_PER_MONTH,
        }
    }
}

/// Resolve available hours.
///
/// Reusing an upstream allocation leaves only the hours outside its window.
/// Otherwise the scenario's own window applies, and without one the fleet
/// runs around the clock. Non-positive results are reported, never clamped.
pub fn available_hours(
    window: Option<&OperatingWindow>,
    upstream: Option<&UpstreamAllocation>,
) -> AvailableHours {
    let per_day = match (upstream, window) {
        (Some(upstream), _) => HOURS_PER_DAY - upstream.window.hours_per_day(),
        (None, Some(window)) => window.hours_per_day(),
        (None, None) => HOURS_PER_DAY,
    };

    if per_day <= 0.0 {
        tracing::warn!(
            "Available hours per day is {}; downstream figures will be degenerate",
            per_day
        );
    }

    AvailableHours::from_daily(per_day)
}
