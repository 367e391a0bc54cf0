//! Financial projection for aquaculture production cycles
//!
//! Given a snapshot of operating [`Parameters`], the engine computes the
//! revenue, cost and net result of every production cycle and the aggregate
//! metrics derived from them. Presentation layers (CLI, CSV export, HTTP)
//! consume the results as plain data.

pub mod error;
pub mod export;
pub mod params;
pub mod projection;
pub mod service;

pub use error::ProjectionError;
pub use params::{Parameters, ParameterField};
pub use projection::{
    compute_cycles, summarize, CycleResult, ProjectionEngine, ProjectionResult, ProjectionSummary,
};
