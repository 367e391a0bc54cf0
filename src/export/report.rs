//! Plain-text rendering of projection results

use crate::projection::{non_finite_label, ProjectionResult, ProjectionSummary};
use std::fmt::Write;

/// Round to whole units, halves away from zero; non-finite values are
/// spelled out
pub fn format_whole(value: f64) -> String {
    match non_finite_label(value) {
        Some(label) => label.to_string(),
        // `{:.0}` alone rounds exact halves to even
        None => format!("{:.0}", value.round()),
    }
}

/// Cumulative results block, one metric per line
pub fn render_summary(summary: &ProjectionSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Cumulative results ({} cycles)", summary.cycle_count);
    let _ = writeln!(out, "  Total biomass:        {} kg", format_whole(summary.total_biomass_kg));
    let _ = writeln!(out, "  Total revenue:        {}", format_whole(summary.total_revenue));
    let _ = writeln!(out, "  Total cost:           {}", format_whole(summary.total_cost));
    let _ = writeln!(out, "  Net result:           {}", format_whole(summary.total_net_result));
    let _ = writeln!(out, "  Production cost/kg:   {}", format_whole(summary.cost_per_kg));
    let _ = writeln!(out, "  Net margin/kg:        {}", format_whole(summary.margin_per_kg));
    out
}

/// Per-cycle table followed by the summary block
pub fn render_report(result: &ProjectionResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<10} {:>16} {:>16} {:>16}", "Cycle", "Revenue", "Cost", "Net result");
    for cycle in &result.cycles {
        let _ = writeln!(
            out,
            "{:<10} {:>16} {:>16} {:>16}",
            cycle.label(),
            format_whole(cycle.revenue),
            format_whole(cycle.cost),
            format_whole(cycle.net_result)
        );
    }
    out.push('\n');
    out.push_str(&render_summary(&result.summary));
    out
}
