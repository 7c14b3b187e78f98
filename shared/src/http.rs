//! HTTP helpers for the webhook functions.

use lambda_http::{Body, Response};
use serde::Serialize;

use crate::Error;

/// Header the assistant platform uses to pick the response protocol.
pub const ASSISTANT_API_VERSION_HEADER: &str = "google-assistant-api-version";

/// Error body returned for rejected requests.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Create a JSON response with the given status code and data.
pub fn json_response<T: Serialize>(status: u16, data: &T) -> Result<Response<Body>, lambda_http::Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .header(ASSISTANT_API_VERSION_HEADER, "v1")
        .body(Body::from(serde_json::to_string(data)?))
        .map_err(Box::new)?;

    Ok(response)
}

/// Create an error response with the given status code and message.
pub fn error_response(status: u16, message: impl Into<String>) -> Result<Response<Body>, lambda_http::Error> {
    json_response(
        status,
        &ErrorBody {
            error: message.into(),
        },
    )
}

/// Convert a handling error into its HTTP response.
pub fn from_error(err: &Error) -> Result<Response<Body>, lambda_http::Error> {
    let message = match err {
        Error::Validation(msg) => msg.clone(),
        other => other.to_string(),
    };
    error_response(err.status_code(), message)
}
