//! Data models module
//!
//! Contains the records exchanged with the derivation engine:
//! - Calculation input (workload, benchmark, window, pricing, upstream)
//! - Calculation result and cost comparison

pub mod input;
pub mod result;

pub use input::{
    ActivityProfile, Benchmark, CalculationInput, OperatingWindow, Pricing, Scenario,
    UpstreamAllocation, Workload,
};
pub use result::{CalculationResult, CostComparison, CostHorizons, WorkloadVolumes};
