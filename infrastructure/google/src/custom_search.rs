use async_trait::async_trait;
use serde::Deserialize;

use business::domain::suggestion::errors::SuggestionError;
use business::domain::suggestion::model::SearchKind;
use business::domain::suggestion::services::{WebHit, WebSearchService, WebSearchType};

use crate::client::GoogleClient;

#[derive(Debug, Deserialize)]
struct CustomSearchResponse {
    /// Absent when the query matched nothing.
    #[serde(default)]
    items: Vec<CustomSearchItem>,
}

#[derive(Debug, Deserialize)]
struct CustomSearchItem {
    link: Option<String>,
}

pub struct WebSearchGoogle {
    client: GoogleClient,
}

impl WebSearchGoogle {
    pub fn new(client: GoogleClient) -> Self {
        Self { client }
    }

    fn query_params(&self, query: &str, search_type: WebSearchType) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", query.to_string()),
            ("key", self.client.api_key.clone()),
            ("cx", self.client.search_engine_id.clone()),
        ];
        if search_type == WebSearchType::Image {
            params.push(("searchType", "image".to_string()));
        }
        params
    }

    fn into_hits(response: CustomSearchResponse) -> Vec<WebHit> {
        response
            .items
            .into_iter()
            .filter_map(|item| item.link)
            .map(|link| WebHit { link })
            .collect()
    }
}

#[async_trait]
impl WebSearchService for WebSearchGoogle {
    async fn search(
        &self,
        query: &str,
        search_type: WebSearchType,
    ) -> Result<Vec<WebHit>, SuggestionError> {
        // Image and video lookups share this endpoint; the aggregator names the failing one.
        let kind = match search_type {
            WebSearchType::Image => SearchKind::Image,
            WebSearchType::General => SearchKind::Video,
        };
        let failed = |details: String| SuggestionError::search_failed(kind, details);

        let response = self
            .client
            .client
            .get(&self.client.custom_search_url)
            .query(&self.query_params(query, search_type))
            .send()
            .await
            .map_err(|e| failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(failed(format!(
                "Custom Search returned {}: {}",
                status, body
            )));
        }

        let data: CustomSearchResponse = response
            .json()
            .await
            .map_err(|e| failed(e.to_string()))?;

        Ok(Self::into_hits(data))
    }
}
