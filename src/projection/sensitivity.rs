//! One-parameter sensitivity sweeps
//!
//! Each point re-runs the full projection with a single field replaced.
//! Points are evaluated in parallel and returned in input order.

use super::{ProjectionEngine, ProjectionSummary};
use crate::error::Result;
use crate::params::{ParameterField, Parameters};
use rayon::prelude::*;

/// Projection summary at one swept value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub value: f64,
    pub summary: ProjectionSummary,
}

/// Evaluate the projection for every value of `field`
///
/// Every value is applied before any projection runs, so an out-of-range
/// cycle count fails the whole sweep up front.
pub fn sweep(
    base: &Parameters,
    field: ParameterField,
    values: &[f64],
) -> Result<Vec<SweepPoint>> {
    log::debug!("Sweeping {} over {} values", field, values.len());

    let snapshots = values
        .iter()
        .map(|&value| Ok((value, base.with_field(field, value)?)))
        .collect::<Result<Vec<_>>>()?;

    Ok(snapshots
        .into_par_iter()
        .map(|(value, params)| {
            let result = ProjectionEngine::new(params).project();
            SweepPoint { value, summary: result.summary }
        })
        .collect())
}

/// `steps` evenly spaced values from `start` to `end` inclusive.
///
/// One step yields just `start`; zero steps yield nothing.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps - 1) as f64;
            (0..steps)
                .map(|i| if i == steps - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}
