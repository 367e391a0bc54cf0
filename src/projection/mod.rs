//! Projection engine for aquaculture production cycles

mod engine;
mod cashflows;
mod summary;
pub mod sensitivity;

pub use engine::{compute_cycles, ProjectionEngine};
pub use cashflows::{CycleResult, ProjectionResult, SeriesKind};
pub use summary::{summarize, non_finite_label, ProjectionSummary};
