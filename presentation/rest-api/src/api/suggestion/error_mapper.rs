use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::suggestion::errors::SuggestionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

const UPSTREAM_FAILURE: &str = "Failed to generate bilingual suggestion";
const INCOMPLETE_GENERATION: &str = "AI response was incomplete or malformed.";

impl IntoErrorResponse for SuggestionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let detail = self.details().to_string();
        let body = if self.is_upstream() {
            ErrorResponse {
                error: UPSTREAM_FAILURE.to_string(),
                details: Some(detail),
                text: None,
            }
        } else {
            ErrorResponse {
                error: INCOMPLETE_GENERATION.to_string(),
                details: None,
                text: Some(detail),
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body))
    }
}
