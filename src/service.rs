//! Request handling for the HTTP surface
//!
//! The handler is transport-agnostic: it takes the raw request body and the
//! requested output format, and returns the status, content type and body to
//! send back. The Lambda binary only adapts this to `lambda_http`.

use crate::error::ProjectionError;
use crate::export::{cycles_to_csv, DEFAULT_EXPORT_FILENAME};
use crate::params::parse_parameters;
use crate::projection::ProjectionEngine;
use serde_json::json;

/// Output format selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl OutputFormat {
    /// Parse a `format` query value; anything unrecognised means JSON
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("csv") => OutputFormat::Csv,
            _ => OutputFormat::Json,
        }
    }
}

/// Transport-independent response
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceResponse {
    pub status: u16,
    pub content_type: &'static str,
    /// Suggested download name, set for file exports
    pub filename: Option<&'static str>,
    pub body: String,
}

impl ServiceResponse {
    fn json(status: u16, body: String) -> Self {
        Self { status, content_type: "application/json", filename: None, body }
    }

    fn error(status: u16, err: &ProjectionError) -> Self {
        Self::json(status, json!({ "error": err.to_string() }).to_string())
    }
}

/// Project the parameters in `body` and render them in `format`.
///
/// An empty body projects the default parameters. Malformed parameters
/// produce a 400 response.
pub fn handle_request(body: &[u8], format: OutputFormat) -> ServiceResponse {
    let text = String::from_utf8_lossy(body);
    let params = match parse_parameters(&text) {
        Ok(params) => params,
        Err(err) => {
            log::warn!("Rejected request: {}", err);
            return ServiceResponse::error(400, &err);
        }
    };

    let result = ProjectionEngine::new(params).project();

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(&result).map_err(ProjectionError::from),
        OutputFormat::Csv => cycles_to_csv(&result.cycles),
    };

    match (rendered, format) {
        (Ok(body), OutputFormat::Json) => ServiceResponse::json(200, body),
        (Ok(body), OutputFormat::Csv) => ServiceResponse {
            status: 200,
            content_type: "text/csv",
            filename: Some(DEFAULT_EXPORT_FILENAME),
            body,
        },
        (Err(err), _) => {
            log::error!("Failed to render projection: {}", err);
            ServiceResponse::error(500, &err)
        }
    }
}
