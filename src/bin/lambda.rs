//! AWS Lambda entry point
//!
//! POST a JSON parameter object; add `?format=csv` to receive the cycle
//! export instead of the JSON projection.

use aqua_projection::service::{handle_request, OutputFormat};
use lambda_http::{run, service_fn, Body, Request, RequestExt, Response};
use lambda_runtime::Error;

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let format = OutputFormat::from_query(
        event
            .query_string_parameters_ref()
            .and_then(|query| query.first("format")),
    );

    let response = handle_request(event.body().as_ref(), format);

    let mut builder = Response::builder()
        .status(response.status)
        .header("content-type", response.content_type);
    if let Some(filename) = response.filename {
        builder = builder.header(
            "content-disposition",
            format!("attachment; filename=\"{}\"", filename),
        );
    }

    Ok(builder.body(Body::from(response.body))?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
