//! Tabular export of projected cycles
//!
//! Writes one CSV row per cycle under the header `Cycle,Revenue,Cost,NetResult`.

pub mod report;

use crate::error::Result;
use crate::projection::{non_finite_label, CycleResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Default file name for the cycle export
pub const DEFAULT_EXPORT_FILENAME: &str = "cycle_results.csv";

/// Column header of the cycle export
pub const CSV_HEADER: [&str; 4] = ["Cycle", "Revenue", "Cost", "NetResult"];

/// Format an amount in shortest round-trip form (`7560000`, `1.5`), with
/// non-finite values spelled out as `Infinity`, `-Infinity` or `NaN`.
pub fn format_number(value: f64) -> String {
    if let Some(label) = non_finite_label(value) {
        return label.to_string();
    }
    if value == 0.0 {
        // drop the sign of -0
        return "0".to_string();
    }
    value.to_string()
}

/// Write the cycle table as CSV to any writer
pub fn write_cycles_csv<W: Write>(writer: W, cycles: &[CycleResult]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for cycle in cycles {
        csv_writer.write_record([
            cycle.label(),
            format_number(cycle.revenue),
            format_number(cycle.cost),
            format_number(cycle.net_result),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render the cycle table as a CSV string
pub fn cycles_to_csv(cycles: &[CycleResult]) -> Result<String> {
    let mut buffer = Vec::new();
    write_cycles_csv(&mut buffer, cycles)?;
    csv_text(buffer)
}

fn csv_text(buffer: Vec<u8>) -> Result<String> {
    Ok(String::from_utf8(buffer)?)
}

/// Write the cycle table to a CSV file
pub fn export_cycles<P: AsRef<Path>>(path: P, cycles: &[CycleResult]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_cycles_csv(file, cycles)?;
    log::info!("Exported {} cycles to {}", cycles.len(), path.display());
    Ok(())
}
