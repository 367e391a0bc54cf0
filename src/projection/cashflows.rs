//! Per-cycle results and the combined projection output

use super::summary::{serialize_amount, ProjectionSummary};
use crate::params::Parameters;
use serde::Serialize;

/// Financial outcome of a single production cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleResult {
    /// 1-based cycle number
    pub cycle_index: u32,
    /// Harvested biomass (kg)
    #[serde(serialize_with = "serialize_amount")]
    pub biomass_kg: f64,
    /// Sales of the harvest
    #[serde(serialize_with = "serialize_amount")]
    pub revenue: f64,
    /// Feed component of the cost
    #[serde(serialize_with = "serialize_amount")]
    pub feed_cost: f64,
    /// Feed plus fixed costs
    #[serde(serialize_with = "serialize_amount")]
    pub cost: f64,
    /// Revenue minus cost
    #[serde(serialize_with = "serialize_amount")]
    pub net_result: f64,
}

impl CycleResult {
    /// Display label used by charts and the CSV export, e.g. "Cycle 2"
    pub fn label(&self) -> String {
        format!("Cycle {}", self.cycle_index)
    }
}

/// Metric series plotted per cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Revenue,
    Cost,
    NetResult,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 3] = [SeriesKind::Revenue, SeriesKind::Cost, SeriesKind::NetResult];

    pub fn name(self) -> &'static str {
        match self {
            SeriesKind::Revenue => "Revenue",
            SeriesKind::Cost => "Cost",
            SeriesKind::NetResult => "NetResult",
        }
    }

    pub fn value(self, cycle: &CycleResult) -> f64 {
        match self {
            SeriesKind::Revenue => cycle.revenue,
            SeriesKind::Cost => cycle.cost,
            SeriesKind::NetResult => cycle.net_result,
        }
    }
}

/// Complete projection: the parameter snapshot, every cycle, and the totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    pub parameters: Parameters,
    pub cycles: Vec<CycleResult>,
    pub summary: ProjectionSummary,
}

impl ProjectionResult {
    /// Ordered (label, value) points of one metric, for chart consumers
    pub fn series(&self, kind: SeriesKind) -> Vec<(String, f64)> {
        self.cycles
            .iter()
            .map(|cycle| (cycle.label(), kind.value(cycle)))
            .collect()
    }
}
