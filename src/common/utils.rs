use lambda_http::http::header::CONTENT_TYPE;
use lambda_http::http::StatusCode;
use lambda_http::{Request, RequestPayloadExt, Response};
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

use crate::common::errors::Error;

const EMPTY_PAYLOAD_ERROR: &str = "Request payload is empty";

/// Deserializes the request body into `T`.
///
/// Requests carrying a content type go through `RequestPayloadExt`. Bodies
/// without one are read as raw JSON. Unusable payloads are answered with a 400.
pub fn extract_request<T: DeserializeOwned>(request: Request) -> Result<T, Error> {
    if !request.headers().contains_key(CONTENT_TYPE) {
        return parse_raw_body(request.body());
    }

    match request.payload::<T>() {
        Ok(Some(val)) => Ok(val),
        Ok(None) => parse_raw_body(request.body()),
        Err(err) => Err(Error::HttpError(text_response(
            StatusCode::BAD_REQUEST,
            err.to_string(),
        )?)),
    }
}

fn parse_raw_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::HttpError(text_response(
            StatusCode::BAD_REQUEST,
            EMPTY_PAYLOAD_ERROR,
        )?));
    }

    match serde_json::from_slice::<T>(body) {
        Ok(val) => Ok(val),
        Err(err) => Err(Error::HttpError(text_response(
            StatusCode::BAD_REQUEST,
            err.to_string(),
        )?)),
    }
}

pub fn text_response(
    status: StatusCode,
    body: impl Into<String>,
) -> Result<Response<String>, Error> {
    let response = Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "text/plain")
        .body(body.into())?;

    Ok(response)
}

/// Installs the global subscriber for CloudWatch. `RUST_LOG` overrides the
/// default `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time() // CloudWatch will add the ingestion time
        .with_target(false)
        .init();
}
