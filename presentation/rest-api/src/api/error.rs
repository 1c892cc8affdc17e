use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body returned when a suggestion cannot be produced.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Human-readable summary of the failure
    pub error: String,
    /// Upstream error message, when a remote call failed
    #[oai(skip_serializing_if_is_none)]
    pub details: Option<String>,
    /// Raw generation reply, when it could not be parsed
    #[oai(skip_serializing_if_is_none)]
    pub text: Option<String>,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
