use std::sync::Arc;

use async_trait::async_trait;

use crate::application::suggestion::aggregate::MealSearchAggregator;
use crate::domain::logger::Logger;
use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::{
    MealLabel, MealSuggestion, SuggestionRequest, SuggestionSettings, SuggestionStage,
};
use crate::domain::suggestion::parser::parse_meal;
use crate::domain::suggestion::prompt::build_prompt;
use crate::domain::suggestion::queries::SearchQueries;
use crate::domain::suggestion::services::{GenerationRequest, MealGeneratorService};
use crate::domain::suggestion::use_cases::suggest::SuggestMealUseCase;

/// Prompt, parse, validate, search, assemble. One call graph per request, nothing shared.
pub struct SuggestMealUseCaseImpl {
    pub generator: Arc<dyn MealGeneratorService>,
    pub aggregator: MealSearchAggregator,
    pub settings: SuggestionSettings,
    pub logger: Arc<dyn Logger>,
}

impl SuggestMealUseCaseImpl {
    fn fail(&self, err: SuggestionError) -> SuggestionError {
        self.logger.error(&format!(
            "Suggestion failed while {}: {} ({})",
            err.stage(),
            err,
            err.details()
        ));
        self.logger.stage(SuggestionStage::Failed);
        err
    }
}

#[async_trait]
impl SuggestMealUseCase for SuggestMealUseCaseImpl {
    async fn execute(&self, request: SuggestionRequest) -> Result<MealSuggestion, SuggestionError> {
        self.logger.stage(SuggestionStage::Received);
        self.logger.info(&format!(
            "Received suggestion request (lang: {}, location: {}): {}",
            request.language, request.location, request.mood
        ));

        self.logger.stage(SuggestionStage::Prompting);
        let generation = GenerationRequest {
            prompt: build_prompt(&request.mood),
            temperature: self.settings.temperature,
            max_output_tokens: self.settings.max_output_tokens,
        };
        let reply = self
            .generator
            .generate(&generation)
            .await
            .map_err(|err| self.fail(err))?;
        self.logger.debug(&format!("Generation reply: {}", reply));

        self.logger.stage(SuggestionStage::Parsing);
        let meal = parse_meal(&reply);

        self.logger.stage(SuggestionStage::Validating);
        if !meal.is_complete() {
            let missing = meal
                .missing_labels()
                .iter()
                .map(MealLabel::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            self.logger
                .warn(&format!("Generation reply is missing: {}", missing));
            return Err(self.fail(SuggestionError::IncompleteGeneration { raw_reply: reply }));
        }

        self.logger.stage(SuggestionStage::Searching);
        let queries = SearchQueries::derive(&meal.meal_name_en);
        self.logger.info(&format!(
            "Searching places: '{}', image: '{}', video: '{}'",
            queries.places, queries.image, queries.video
        ));
        let results = self
            .aggregator
            .gather(&queries, &request, self.settings.search_radius_meters)
            .await
            .map_err(|err| self.fail(err))?;

        self.logger.info(&format!(
            "Suggested {} with {} places (image: {}, video: {})",
            meal.meal_name_en,
            results.places.len(),
            !results.meal_image_url.is_empty(),
            !results.tutorial_video_url.is_empty()
        ));
        self.logger.stage(SuggestionStage::Responded);

        Ok(MealSuggestion::assemble(meal, results))
    }
}
