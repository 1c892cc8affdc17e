use async_trait::async_trait;

use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::{MealSuggestion, SuggestionRequest};

#[async_trait]
pub trait SuggestMealUseCase: Send + Sync {
    async fn execute(&self, request: SuggestionRequest) -> Result<MealSuggestion, SuggestionError>;
}
