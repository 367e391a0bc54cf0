//! Cycle-by-cycle projection over a parameter snapshot

use super::cashflows::{CycleResult, ProjectionResult};
use super::summary::summarize;
use crate::params::Parameters;

/// Project every cycle of `params`.
///
/// Parameters do not vary between cycles, so all entries carry the same
/// figures and differ only in their index. Returns exactly
/// `params.cycle_count` results, empty for zero cycles.
pub fn compute_cycles(params: &Parameters) -> Vec<CycleResult> {
    (1..=params.cycle_count)
        .map(|cycle_index| project_cycle(params, cycle_index))
        .collect()
}

fn project_cycle(params: &Parameters, cycle_index: u32) -> CycleResult {
    let biomass_kg = params.biomass_kg();
    let revenue = biomass_kg * params.sale_price_per_kg;
    let feed_cost = biomass_kg * params.feed_conversion_ratio * params.feed_price_per_kg;
    let cost = feed_cost + params.other_costs_per_cycle;

    CycleResult {
        cycle_index,
        biomass_kg,
        revenue,
        feed_cost,
        cost,
        net_result: revenue - cost,
    }
}

/// Runs a projection over one immutable parameter snapshot
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    params: Parameters,
}

impl ProjectionEngine {
    pub fn new(params: Parameters) -> Self {
        Self { params }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    /// Compute all cycles and their summary
    pub fn project(&self) -> ProjectionResult {
        let cycles = compute_cycles(&self.params);
        let summary = summarize(&cycles, self.params.biomass_kg());

        log::debug!(
            "Projected {} cycles: net result {}, margin/kg {}",
            summary.cycle_count,
            summary.total_net_result,
            summary.margin_per_kg
        );

        ProjectionResult {
            parameters: self.params,
            cycles,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_default_scenario_cycles() {
        let cycles = compute_cycles(&Parameters::default());

        assert_eq!(cycles.len(), 3);
        for (i, cycle) in cycles.iter().enumerate() {
            assert_eq!(cycle.cycle_index, i as u32 + 1);
            assert_relative_eq!(cycle.biomass_kg, 6300.0, max_relative = 1e-12);
            assert_relative_eq!(cycle.revenue, 7_560_000.0, max_relative = 1e-12);
            assert_relative_eq!(cycle.feed_cost, 7_371_000.0, max_relative = 1e-12);
            assert_relative_eq!(cycle.cost, 10_371_000.0, max_relative = 1e-12);
            assert_relative_eq!(cycle.net_result, -2_811_000.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_default_scenario_summary() {
        let result = ProjectionEngine::new(Parameters::default()).project();
        let summary = result.summary;

        assert_relative_eq!(summary.total_biomass_kg, 18_900.0, max_relative = 1e-12);
        assert_relative_eq!(summary.total_revenue, 22_680_000.0, max_relative = 1e-12);
        assert_relative_eq!(summary.total_cost, 31_113_000.0, max_relative = 1e-12);
        assert_relative_eq!(summary.total_net_result, -8_433_000.0, max_relative = 1e-12);
        assert_abs_diff_eq!(summary.cost_per_kg, 1646.19, epsilon = 0.01);
        assert_abs_diff_eq!(summary.margin_per_kg, -446.19, epsilon = 0.01);
    }

    #[test]
    fn test_cycle_count_controls_length() {
        for n in [0u32, 1, 2, 10, 250] {
            let params = Parameters { cycle_count: n, ..Default::default() };
            let cycles = compute_cycles(&params);
            assert_eq!(cycles.len(), n as usize);
            for cycle in &cycles {
                assert_eq!(cycle.net_result, cycle.revenue - cycle.cost);
            }
        }
    }

    #[test]
    fn test_zero_cycles() {
        let params = Parameters { cycle_count: 0, ..Default::default() };
        let result = ProjectionEngine::new(params).project();

        assert!(result.cycles.is_empty());
        assert_eq!(result.summary.total_biomass_kg, 0.0);
        assert!(!result.summary.cost_per_kg.is_finite());
        assert!(!result.summary.margin_per_kg.is_finite());
    }

    #[test]
    fn test_zero_fish_keeps_fixed_costs() {
        let params = Parameters { fish_per_pond: 0.0, ..Default::default() };
        let result = ProjectionEngine::new(params).project();

        assert_eq!(result.cycles[0].revenue, 0.0);
        assert_eq!(result.cycles[0].cost, 3_000_000.0);
        assert_eq!(result.summary.cost_per_kg, f64::INFINITY);
        assert_eq!(result.summary.margin_per_kg, f64::NEG_INFINITY);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let engine = ProjectionEngine::new(Parameters::default());
        assert_eq!(engine.project(), engine.project());
        assert_eq!(
            compute_cycles(engine.parameters()),
            compute_cycles(engine.parameters())
        );
    }

    #[test]
    fn test_nan_input_propagates() {
        let params = Parameters { avg_harvest_weight_g: f64::NAN, ..Default::default() };
        let result = ProjectionEngine::new(params).project();

        assert!(result.cycles.iter().all(|c| c.revenue.is_nan() && c.net_result.is_nan()));
        assert!(result.summary.total_revenue.is_nan());
        assert!(result.summary.cost_per_kg.is_nan());
    }

    #[test]
    fn test_higher_sale_price_raises_every_cycle() {
        let base = Parameters::default();
        let low = compute_cycles(&base);
        let high = compute_cycles(&Parameters { sale_price_per_kg: 1250.0, ..base });

        for (l, h) in low.iter().zip(&high) {
            assert!(h.revenue > l.revenue);
            assert!(h.net_result > l.net_result);
            assert_eq!(h.cost, l.cost);
        }
    }

    #[test]
    fn test_totals_consistent_with_cycles() {
        let params = Parameters { cycle_count: 7, survival_rate_pct: 82.5, ..Default::default() };
        let result = ProjectionEngine::new(params).project();

        let revenue: f64 = result.cycles.iter().map(|c| c.revenue).sum();
        let cost: f64 = result.cycles.iter().map(|c| c.cost).sum();
        assert_relative_eq!(result.summary.total_revenue, revenue, max_relative = 1e-12);
        assert_relative_eq!(result.summary.total_cost, cost, max_relative = 1e-12);
        assert_eq!(
            result.summary.total_net_result,
            result.summary.total_revenue - result.summary.total_cost
        );
    }
}
