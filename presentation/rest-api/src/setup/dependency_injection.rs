use std::sync::Arc;

use logger::TracingLogger;

use google::client::GoogleClient;
use google::custom_search::WebSearchGoogle;
use google::places::PlaceSearchGoogle;
use openai::client::OpenAIClient;
use openai::meal_generator::MealGeneratorOpenAI;

use business::application::suggestion::aggregate::MealSearchAggregator;
use business::application::suggestion::suggest::SuggestMealUseCaseImpl;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub suggestion_api: crate::api::suggestion::routes::SuggestionApi,
}

impl DependencyContainer {
    /// Credentials are handed to each adapter here; nothing downstream reads the environment.
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let mut openai_client =
            OpenAIClient::new(config.openai.api_key.clone(), config.openai.model.clone());
        if let Some(base_url) = &config.openai.base_url {
            openai_client = openai_client.with_base_url(base_url.clone());
        }
        let google_client = GoogleClient::new(
            config.google.api_key.clone(),
            config.google.search_engine_id.clone(),
        );

        let meal_generator = Arc::new(MealGeneratorOpenAI::new(openai_client));
        let place_search = Arc::new(PlaceSearchGoogle::new(google_client.clone()));
        let web_search = Arc::new(WebSearchGoogle::new(google_client));

        // Suggestion use case
        let suggest_use_case = Arc::new(SuggestMealUseCaseImpl {
            generator: meal_generator,
            aggregator: MealSearchAggregator {
                places: place_search,
                web_search,
                logger: logger.clone(),
            },
            settings: config.suggestion.settings.clone(),
            logger,
        });

        let suggestion_api = crate::api::suggestion::routes::SuggestionApi::new(suggest_use_case);

        Self {
            health_api,
            suggestion_api,
        }
    }
}
