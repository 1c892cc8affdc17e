use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::suggestion::use_cases::suggest::SuggestMealUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::suggestion::dto::{SuggestRequest, SuggestionResponse};
use crate::api::tags::ApiTags;

pub struct SuggestionApi {
    suggest_use_case: Arc<dyn SuggestMealUseCase>,
}

impl SuggestionApi {
    pub fn new(suggest_use_case: Arc<dyn SuggestMealUseCase>) -> Self {
        Self { suggest_use_case }
    }
}

/// Suggestion API
///
/// Endpoint for turning a mood into a bilingual meal recommendation.
#[OpenApi]
impl SuggestionApi {
    /// Suggest a meal for a mood
    ///
    /// Generates a meal name and recipe idea in English and Arabic, then looks up
    /// up to three nearby restaurants, a picture of the meal and a how-to-cook video.
    /// Missing image or video is returned as an empty string; any failed upstream
    /// call fails the whole request.
    #[oai(path = "/api/suggest", method = "post", tag = "ApiTags::Suggestions")]
    async fn suggest(&self, body: Json<SuggestRequest>) -> SuggestMealResponse {
        match self.suggest_use_case.execute(body.0.into()).await {
            Ok(suggestion) => SuggestMealResponse::Ok(Json(suggestion.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                SuggestMealResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SuggestMealResponse {
    #[oai(status = 200)]
    Ok(Json<SuggestionResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
