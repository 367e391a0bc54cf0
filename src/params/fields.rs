//! Enumerated table of parameter fields and their display labels

use super::Parameters;
use crate::error::ProjectionError;
use std::fmt;
use std::str::FromStr;

/// One editable field of [`Parameters`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterField {
    PondCount,
    FishPerPond,
    SurvivalRatePct,
    AvgHarvestWeightG,
    SalePricePerKg,
    FeedConversionRatio,
    FeedPricePerKg,
    OtherCostsPerCycle,
    CycleCount,
}

impl ParameterField {
    /// All fields, in input-form order
    pub const ALL: [ParameterField; 9] = [
        ParameterField::PondCount,
        ParameterField::FishPerPond,
        ParameterField::SurvivalRatePct,
        ParameterField::AvgHarvestWeightG,
        ParameterField::SalePricePerKg,
        ParameterField::FeedConversionRatio,
        ParameterField::FeedPricePerKg,
        ParameterField::OtherCostsPerCycle,
        ParameterField::CycleCount,
    ];

    /// Serialized (camelCase) name, as used in parameter files and requests
    pub fn key(self) -> &'static str {
        match self {
            ParameterField::PondCount => "pondCount",
            ParameterField::FishPerPond => "fishPerPond",
            ParameterField::SurvivalRatePct => "survivalRatePct",
            ParameterField::AvgHarvestWeightG => "avgHarvestWeightG",
            ParameterField::SalePricePerKg => "salePricePerKg",
            ParameterField::FeedConversionRatio => "feedConversionRatio",
            ParameterField::FeedPricePerKg => "feedPricePerKg",
            ParameterField::OtherCostsPerCycle => "otherCostsPerCycle",
            ParameterField::CycleCount => "cycleCount",
        }
    }

    /// Human-readable label for input forms
    pub fn label(self) -> &'static str {
        match self {
            ParameterField::PondCount => "Number of ponds",
            ParameterField::FishPerPond => "Fish per pond",
            ParameterField::SurvivalRatePct => "Survival rate (%)",
            ParameterField::AvgHarvestWeightG => "Average harvest weight (g)",
            ParameterField::SalePricePerKg => "Sale price (per kg)",
            ParameterField::FeedConversionRatio => "FCR (feed conversion ratio)",
            ParameterField::FeedPricePerKg => "Feed price (per kg)",
            ParameterField::OtherCostsPerCycle => "Other costs (per cycle)",
            ParameterField::CycleCount => "Number of cycles",
        }
    }

    /// Read this field from a snapshot
    pub fn get(self, params: &Parameters) -> f64 {
        match self {
            ParameterField::PondCount => params.pond_count,
            ParameterField::FishPerPond => params.fish_per_pond,
            ParameterField::SurvivalRatePct => params.survival_rate_pct,
            ParameterField::AvgHarvestWeightG => params.avg_harvest_weight_g,
            ParameterField::SalePricePerKg => params.sale_price_per_kg,
            ParameterField::FeedConversionRatio => params.feed_conversion_ratio,
            ParameterField::FeedPricePerKg => params.feed_price_per_kg,
            ParameterField::OtherCostsPerCycle => params.other_costs_per_cycle,
            ParameterField::CycleCount => params.cycle_count as f64,
        }
    }
}

impl fmt::Display for ParameterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ParameterField {
    type Err = ProjectionError;

    /// Accepts the camelCase key or its snake_case spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.chars().filter(|c| *c != '_' && *c != '-').collect();
        ParameterField::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ProjectionError::UnknownField(s.to_string()))
    }
}
