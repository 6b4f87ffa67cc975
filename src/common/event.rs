//! Direct Lambda invocations: the event is the payload itself, either as a
//! JSON object or as a JSON document encoded in a string, and the result is a
//! plain `{statusCode, body}` object.

use lambda_runtime::Error as LambdaError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::common::errors::BookError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl StatusResponse {
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }
}

pub fn extract_event<T: DeserializeOwned>(event: Value) -> Result<T, BookError> {
    let result = match event {
        Value::Null => return Err(BookError::InvalidRequest("event is empty".into())),
        Value::String(inner) => serde_json::from_str::<T>(&inner),
        other => serde_json::from_value::<T>(other),
    };

    result.map_err(|err| BookError::InvalidRequest(err.to_string()))
}

/// Rejections become a status object; every other failure goes to the runtime.
pub fn into_status_response(
    result: Result<(), BookError>,
    success_status: u16,
    success_body: &str,
) -> Result<StatusResponse, LambdaError> {
    match result {
        Ok(()) => Ok(StatusResponse::new(success_status, success_body)),
        Err(err) => match err.status_code() {
            Some(status) => Ok(StatusResponse::new(status.as_u16(), err.to_string())),
            None => Err(Box::new(err)),
        },
    }
}
