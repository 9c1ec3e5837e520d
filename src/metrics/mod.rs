//! Sizing metrics module
//!
//! Step-by-step derivation of GPU requirements:
//! - Token volumes and concurrency
//! - Latency and throughput
//! - Available hours
//! - GPU count, cost and per-minute comparison

pub mod cost;
pub mod hours;
pub mod sizing;
pub mod throughput;
pub mod tokens;

pub use sizing::calculate;
