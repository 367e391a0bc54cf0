//! Command line front end for the cycle projection
//!
//! `project` prints the per-cycle table and cumulative results and writes
//! the CSV export; `sweep` varies one parameter; `fields` lists the
//! parameter table.

use anyhow::{Context, Result};
use aqua_projection::{
    export::{self, report, DEFAULT_EXPORT_FILENAME},
    params::{load_parameters, ParameterField, Parameters},
    projection::{
        sensitivity::{linspace, sweep},
        ProjectionEngine,
    },
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "aqua_projection", version, about = "Aquaculture production cycle projections")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project all cycles, print the results and export them as CSV
    Project {
        #[command(flatten)]
        params: ParamArgs,

        /// CSV output path
        #[arg(long, short, default_value = DEFAULT_EXPORT_FILENAME)]
        output: PathBuf,

        /// Skip writing the CSV export
        #[arg(long)]
        no_export: bool,
    },
    /// Re-run the projection over a range of values for one parameter
    Sweep {
        #[command(flatten)]
        params: ParamArgs,

        /// Parameter to vary (e.g. salePricePerKg)
        #[arg(long)]
        field: ParameterField,

        #[arg(long, allow_negative_numbers = true)]
        from: f64,

        #[arg(long, allow_negative_numbers = true)]
        to: f64,

        #[arg(long, default_value_t = 11)]
        steps: usize,
    },
    /// List parameter keys and labels
    Fields,
}

/// Parameter file plus per-field overrides
#[derive(Args)]
struct ParamArgs {
    /// JSON parameter file; missing fields use defaults
    #[arg(long)]
    params: Option<PathBuf>,

    #[arg(long, allow_negative_numbers = true)]
    pond_count: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    fish_per_pond: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    survival_rate_pct: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    avg_harvest_weight_g: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    sale_price_per_kg: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    feed_conversion_ratio: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    feed_price_per_kg: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    other_costs_per_cycle: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    cycle_count: Option<f64>,
}

impl ParamArgs {
    fn resolve(&self) -> Result<Parameters> {
        let mut params = match &self.params {
            Some(path) => load_parameters(path)
                .with_context(|| format!("loading parameter file {}", path.display()))?,
            None => Parameters::default(),
        };

        let overrides = [
            (ParameterField::PondCount, self.pond_count),
            (ParameterField::FishPerPond, self.fish_per_pond),
            (ParameterField::SurvivalRatePct, self.survival_rate_pct),
            (ParameterField::AvgHarvestWeightG, self.avg_harvest_weight_g),
            (ParameterField::SalePricePerKg, self.sale_price_per_kg),
            (ParameterField::FeedConversionRatio, self.feed_conversion_ratio),
            (ParameterField::FeedPricePerKg, self.feed_price_per_kg),
            (ParameterField::OtherCostsPerCycle, self.other_costs_per_cycle),
            (ParameterField::CycleCount, self.cycle_count),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                params = params
                    .with_field(field, value)
                    .with_context(|| format!("invalid value for {}", field.key()))?;
            }
        }
        Ok(params)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Project { params, output, no_export } => {
            let params = params.resolve()?;
            let start = Instant::now();
            let result = ProjectionEngine::new(params).project();
            log::info!("Projection complete in {:?}", start.elapsed());

            print!("{}", report::render_report(&result));

            if !no_export {
                export::export_cycles(&output, &result.cycles)
                    .with_context(|| format!("writing {}", output.display()))?;
                println!("\nOutput written to {}", output.display());
            }
        }
        Command::Sweep { params, field, from, to, steps } => {
            let params = params.resolve()?;
            let values = linspace(from, to, steps);
            let points = sweep(&params, field, &values)
                .with_context(|| format!("sweeping {}", field.key()))?;

            println!("{:>16} {:>18} {:>14}", field.key(), "Net result", "Margin/kg");
            for point in &points {
                println!(
                    "{:>16} {:>18} {:>14}",
                    export::format_number(point.value),
                    report::format_whole(point.summary.total_net_result),
                    report::format_whole(point.summary.margin_per_kg)
                );
            }
        }
        Command::Fields => {
            for field in ParameterField::ALL {
                println!("{:<22} {}", field.key(), field.label());
            }
        }
    }

    Ok(())
}
