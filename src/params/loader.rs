//! Load parameter snapshots from JSON
//!
//! Missing fields fall back to their defaults, so `{"cycleCount": 5}` is a
//! complete parameter file.

use super::Parameters;
use crate::error::{ProjectionError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load parameters from a JSON file
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<Parameters> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ProjectionError::ParamsIo {
        path: path.to_path_buf(),
        source,
    })?;
    let params = load_parameters_from_reader(BufReader::new(file))?;
    log::info!("Loaded parameters from {}", path.display());
    Ok(params)
}

/// Load parameters from any JSON reader
pub fn load_parameters_from_reader<R: Read>(reader: R) -> Result<Parameters> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse parameters from a JSON string. Blank input yields the defaults.
pub fn parse_parameters(input: &str) -> Result<Parameters> {
    if input.trim().is_empty() {
        return Ok(Parameters::default());
    }
    Ok(serde_json::from_str(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_object_uses_defaults() {
        let params = parse_parameters(r#"{"pondCount": 6, "salePricePerKg": 1500}"#).unwrap();

        assert_eq!(params.pond_count, 6.0);
        assert_eq!(params.sale_price_per_kg, 1500.0);
        assert_eq!(params.fish_per_pond, 5000.0);
        assert_eq!(params.cycle_count, 3);
    }

    #[test]
    fn test_blank_input_is_default() {
        assert_eq!(parse_parameters("  \n").unwrap(), Parameters::default());
    }

    #[test]
    fn test_cycle_count_is_coerced() {
        assert_eq!(parse_parameters(r#"{"cycleCount": 2.9}"#).unwrap().cycle_count, 2);
        assert_eq!(parse_parameters(r#"{"cycleCount": -3}"#).unwrap().cycle_count, 0);
    }

    #[test]
    fn test_oversized_cycle_count_is_rejected() {
        let err = parse_parameters(r#"{"cycleCount": 5000000000}"#).unwrap_err();
        assert!(matches!(err, ProjectionError::ParamsFormat(_)));
        assert!(err.to_string().contains("exceeds the maximum of 10000"));

        let at_limit = parse_parameters(r#"{"cycleCount": 10000}"#).unwrap();
        assert_eq!(at_limit.cycle_count, crate::params::MAX_CYCLE_COUNT);
    }

    #[test]
    fn test_non_numeric_field_is_rejected() {
        let err = parse_parameters(r#"{"fishPerPond": "lots"}"#).unwrap_err();
        assert!(matches!(err, ProjectionError::ParamsFormat(_)));
    }

    #[test]
    fn test_reader_round_trip() {
        let params = Parameters {
            cycle_count: 7,
            feed_conversion_ratio: 1.4,
            ..Default::default()
        };
        let json = serde_json::to_vec(&params).unwrap();
        let loaded = load_parameters_from_reader(json.as_slice()).unwrap();
        assert_eq!(loaded, params);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_parameters("/nonexistent/farm.json").unwrap_err();
        match err {
            ProjectionError::ParamsIo { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/farm.json"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
