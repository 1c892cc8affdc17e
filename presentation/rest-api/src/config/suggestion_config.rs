use anyhow::ensure;

use business::domain::suggestion::model::SuggestionSettings;

use super::env::{parsed_or, process_env};

/// Pipeline tunables.
///
/// Environment variables:
/// - SEARCH_RADIUS_METERS (default: 1000)
/// - GENERATION_TEMPERATURE (default: 0.7, range 0..=2)
/// - GENERATION_MAX_TOKENS (default: 400)
pub struct SuggestionConfig {
    pub settings: SuggestionSettings,
}

impl SuggestionConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(&process_env)
    }

    pub fn from_vars(var: &impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = SuggestionSettings::default();
        let settings = SuggestionSettings {
            search_radius_meters: parsed_or(
                var,
                "SEARCH_RADIUS_METERS",
                defaults.search_radius_meters,
            )?,
            temperature: parsed_or(var, "GENERATION_TEMPERATURE", defaults.temperature)?,
            max_output_tokens: parsed_or(var, "GENERATION_MAX_TOKENS", defaults.max_output_tokens)?,
        };

        ensure!(
            (0.0..=2.0).contains(&settings.temperature),
            "GENERATION_TEMPERATURE must be between 0 and 2"
        );
        ensure!(
            settings.max_output_tokens > 0,
            "GENERATION_MAX_TOKENS must be positive"
        );

        Ok(Self { settings })
    }
}
