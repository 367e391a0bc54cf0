//! Operating parameters for a production projection
//!
//! A [`Parameters`] value is an immutable snapshot: edits produce a new value
//! (see [`Parameters::with_field`]) rather than mutating the one a projection
//! is running over.

mod fields;
pub mod loader;

pub use fields::ParameterField;
pub use loader::{load_parameters, load_parameters_from_reader, parse_parameters};

use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Grams per kilogram, used to convert harvest weight to biomass
pub const GRAMS_PER_KG: f64 = 1000.0;

/// Largest number of cycles a single projection will compute
pub const MAX_CYCLE_COUNT: u32 = 10_000;

/// Operating parameters of the farm, applied identically to every cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    /// Number of ponds in production
    #[serde(default = "default_pond_count")]
    pub pond_count: f64,

    /// Fish stocked per pond
    #[serde(default = "default_fish_per_pond")]
    pub fish_per_pond: f64,

    /// Share of stocked fish surviving to harvest, in percent (90.0 = 90%)
    #[serde(default = "default_survival_rate_pct")]
    pub survival_rate_pct: f64,

    /// Mean weight per fish at harvest, in grams
    #[serde(default = "default_avg_harvest_weight_g")]
    pub avg_harvest_weight_g: f64,

    /// Sale price per kg of harvested fish
    #[serde(default = "default_sale_price_per_kg")]
    pub sale_price_per_kg: f64,

    /// Feed conversion ratio: kg of feed per kg of biomass
    #[serde(default = "default_feed_conversion_ratio")]
    pub feed_conversion_ratio: f64,

    /// Feed price per kg
    #[serde(default = "default_feed_price_per_kg")]
    pub feed_price_per_kg: f64,

    /// Fixed non-feed costs charged to each cycle
    #[serde(default = "default_other_costs_per_cycle")]
    pub other_costs_per_cycle: f64,

    /// Number of cycles to project. Any JSON number is accepted and coerced
    /// with [`coerce_cycle_count`].
    #[serde(
        default = "default_cycle_count",
        deserialize_with = "deserialize_cycle_count"
    )]
    pub cycle_count: u32,
}

fn default_pond_count() -> f64 { 4.0 }
fn default_fish_per_pond() -> f64 { 5000.0 }
fn default_survival_rate_pct() -> f64 { 90.0 }
fn default_avg_harvest_weight_g() -> f64 { 350.0 }
fn default_sale_price_per_kg() -> f64 { 1200.0 }
fn default_feed_conversion_ratio() -> f64 { 1.8 }
fn default_feed_price_per_kg() -> f64 { 650.0 }
fn default_other_costs_per_cycle() -> f64 { 3_000_000.0 }
fn default_cycle_count() -> u32 { 3 }

impl Default for Parameters {
    fn default() -> Self {
        Self {
            pond_count: 4.0,
            fish_per_pond: 5000.0,
            survival_rate_pct: 90.0,
            avg_harvest_weight_g: 350.0,
            sale_price_per_kg: 1200.0,
            feed_conversion_ratio: 1.8,
            feed_price_per_kg: 650.0,
            other_costs_per_cycle: 3_000_000.0,
            cycle_count: 3,
        }
    }
}

impl Parameters {
    /// Harvested biomass of a single cycle, in kg
    ///
    /// Zero, negative and non-finite inputs are not guarded against; they
    /// propagate into the result.
    pub fn biomass_kg(&self) -> f64 {
        self.pond_count
            * self.fish_per_pond
            * (self.survival_rate_pct / 100.0)
            * self.avg_harvest_weight_g
            / GRAMS_PER_KG
    }

    /// Return a copy of this snapshot with one field replaced
    ///
    /// Fails only for a cycle count above [`MAX_CYCLE_COUNT`].
    pub fn with_field(mut self, field: ParameterField, value: f64) -> Result<Self> {
        match field {
            ParameterField::PondCount => self.pond_count = value,
            ParameterField::FishPerPond => self.fish_per_pond = value,
            ParameterField::SurvivalRatePct => self.survival_rate_pct = value,
            ParameterField::AvgHarvestWeightG => self.avg_harvest_weight_g = value,
            ParameterField::SalePricePerKg => self.sale_price_per_kg = value,
            ParameterField::FeedConversionRatio => self.feed_conversion_ratio = value,
            ParameterField::FeedPricePerKg => self.feed_price_per_kg = value,
            ParameterField::OtherCostsPerCycle => self.other_costs_per_cycle = value,
            ParameterField::CycleCount => self.cycle_count = coerce_cycle_count(value)?,
        }
        Ok(self)
    }
}

/// Coerce a free-form numeric cycle count into a usable one.
///
/// Fractions are floored and negatives and NaN become 0. Counts above
/// [`MAX_CYCLE_COUNT`] (including infinity) are rejected.
pub fn coerce_cycle_count(value: f64) -> Result<u32> {
    let floored = value.floor();
    if floored > MAX_CYCLE_COUNT as f64 {
        return Err(ProjectionError::CycleCountOutOfRange {
            value,
            max: MAX_CYCLE_COUNT,
        });
    }
    // float-to-int `as` casts map NaN and negatives to 0
    Ok(floored as u32)
}

fn deserialize_cycle_count<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    coerce_cycle_count(raw).map_err(serde::de::Error::custom)
}
