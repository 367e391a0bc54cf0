//! Aggregate metrics over a sequence of cycles

use super::cashflows::CycleResult;
use serde::{Serialize, Serializer};

/// Totals and per-kg metrics across all projected cycles
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub cycle_count: usize,
    #[serde(serialize_with = "serialize_amount")]
    pub total_biomass_kg: f64,
    #[serde(serialize_with = "serialize_amount")]
    pub total_revenue: f64,
    #[serde(serialize_with = "serialize_amount")]
    pub total_cost: f64,
    #[serde(serialize_with = "serialize_amount")]
    pub total_net_result: f64,
    /// Production cost per kg; non-finite when total biomass is zero
    #[serde(serialize_with = "serialize_amount")]
    pub cost_per_kg: f64,
    /// Net margin per kg; non-finite when total biomass is zero
    #[serde(serialize_with = "serialize_amount")]
    pub margin_per_kg: f64,
}

/// Aggregate a cycle sequence.
///
/// `single_cycle_biomass_kg` is the biomass of one cycle; every cycle shares
/// it. Divisions by a zero total biomass are left as `inf`/`NaN` for the
/// caller to render.
pub fn summarize(cycles: &[CycleResult], single_cycle_biomass_kg: f64) -> ProjectionSummary {
    let total_biomass_kg = cycles.len() as f64 * single_cycle_biomass_kg;
    let total_revenue = cycles.iter().fold(0.0, |sum, c| sum + c.revenue);
    let total_cost = cycles.iter().fold(0.0, |sum, c| sum + c.cost);
    let total_net_result = total_revenue - total_cost;

    ProjectionSummary {
        cycle_count: cycles.len(),
        total_biomass_kg,
        total_revenue,
        total_cost,
        total_net_result,
        cost_per_kg: total_cost / total_biomass_kg,
        margin_per_kg: total_net_result / total_biomass_kg,
    }
}

/// Textual form of a non-finite value, or `None` for finite numbers
pub fn non_finite_label(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

// JSON has no representation for inf/NaN; emit them as strings instead of null
pub(crate) fn serialize_amount<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match non_finite_label(*value) {
        Some(label) => serializer.serialize_str(label),
        None => serializer.serialize_f64(*value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cycle(index: u32, revenue: f64, cost: f64) -> CycleResult {
        CycleResult {
            cycle_index: index,
            biomass_kg: 100.0,
            revenue,
            feed_cost: cost,
            cost,
            net_result: revenue - cost,
        }
    }

    #[test]
    fn test_totals_are_sums() {
        let cycles = vec![cycle(1, 500.0, 300.0), cycle(2, 700.0, 350.0), cycle(3, 100.0, 400.0)];
        let summary = summarize(&cycles, 100.0);

        assert_eq!(summary.cycle_count, 3);
        assert_relative_eq!(summary.total_biomass_kg, 300.0);
        assert_relative_eq!(summary.total_revenue, 1300.0);
        assert_relative_eq!(summary.total_cost, 1050.0);
        assert_relative_eq!(summary.total_net_result, 250.0);
        assert_relative_eq!(summary.cost_per_kg, 3.5);
        assert_relative_eq!(summary.margin_per_kg, 250.0 / 300.0);
    }

    #[test]
    fn test_empty_sequence_has_non_finite_per_kg() {
        let summary = summarize(&[], 6300.0);

        assert_eq!(summary.cycle_count, 0);
        assert_eq!(summary.total_biomass_kg, 0.0);
        assert_eq!(summary.total_revenue, 0.0);
        // 0 / 0
        assert!(summary.cost_per_kg.is_nan());
        assert!(summary.margin_per_kg.is_nan());
    }

    #[test]
    fn test_zero_biomass_with_costs_is_infinite() {
        let cycles = vec![cycle(1, 0.0, 3_000_000.0), cycle(2, 0.0, 3_000_000.0)];
        let summary = summarize(&cycles, 0.0);

        assert_eq!(summary.cost_per_kg, f64::INFINITY);
        assert_eq!(summary.margin_per_kg, f64::NEG_INFINITY);
    }

    #[test]
    fn test_non_finite_labels() {
        assert_eq!(non_finite_label(f64::NAN), Some("NaN"));
        assert_eq!(non_finite_label(f64::INFINITY), Some("Infinity"));
        assert_eq!(non_finite_label(f64::NEG_INFINITY), Some("-Infinity"));
        assert_eq!(non_finite_label(-2.5), None);
    }

    #[test]
    fn test_non_finite_serialized_as_strings() {
        let summary = summarize(&[cycle(1, 0.0, 10.0)], 0.0);
        let value = serde_json::to_value(summary).unwrap();

        assert_eq!(value["costPerKg"], "Infinity");
        assert_eq!(value["marginPerKg"], "-Infinity");
        assert_eq!(value["totalCost"], 10.0);
    }
}
