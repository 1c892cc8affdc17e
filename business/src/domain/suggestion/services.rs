use async_trait::async_trait;

use super::errors::SuggestionError;
use super::model::GeoPoint;
use super::prompt::GenerationPrompt;

/// A prompt plus the sampling parameters it should be generated with.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: GenerationPrompt,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// Service port for the text-generation backend. Returns the raw, untrusted reply.
#[async_trait]
pub trait MealGeneratorService: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, SuggestionError>;
}

/// Text query around a geographic center.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceSearchRequest {
    pub query: String,
    pub location: GeoPoint,
    pub radius_meters: u32,
    /// Preferred language for venue names, passed through from the caller.
    pub language: String,
}

/// A venue as ranked by the places service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceHit {
    pub name: String,
}

/// Service port for searching venues near a point.
#[async_trait]
pub trait PlaceSearchService: Send + Sync {
    async fn search_places(
        &self,
        request: &PlaceSearchRequest,
    ) -> Result<Vec<PlaceHit>, SuggestionError>;
}

/// Result type requested from the web search service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebSearchType {
    Image,
    General,
}

/// A web search result item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebHit {
    pub link: String,
}

/// Service port for general web and image search.
#[async_trait]
pub trait WebSearchService: Send + Sync {
    async fn search(
        &self,
        query: &str,
        search_type: WebSearchType,
    ) -> Result<Vec<WebHit>, SuggestionError>;
}
