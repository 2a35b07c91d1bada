//! End-to-end mining engine: encode → FP-tree → FP-growth → rules →
//! annotation → optional demo fallback.

pub mod pipeline;
pub mod types;

pub use pipeline::MiningEngine;
pub use types::{MiningDiagnostics, MiningOutcome, RuleMode};
