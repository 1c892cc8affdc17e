use async_trait::async_trait;
use serde::Deserialize;

use business::domain::suggestion::errors::SuggestionError;
use business::domain::suggestion::model::SearchKind;
use business::domain::suggestion::services::{PlaceHit, PlaceSearchRequest, PlaceSearchService};

use crate::client::GoogleClient;

#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<TextSearchPlace>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TextSearchPlace {
    name: Option<String>,
}

pub struct PlaceSearchGoogle {
    client: GoogleClient,
}

impl PlaceSearchGoogle {
    pub fn new(client: GoogleClient) -> Self {
        Self { client }
    }

    /// `OK` and `ZERO_RESULTS` are answers; every other status is a failed call.
    /// Every result is kept in service order, an unnamed one with an empty name.
    fn into_hits(response: TextSearchResponse) -> Result<Vec<PlaceHit>, SuggestionError> {
        match response.status.as_str() {
            "OK" | "ZERO_RESULTS" => Ok(response
                .results
                .into_iter()
                .map(|place| PlaceHit {
                    name: place.name.unwrap_or_default(),
                })
                .collect()),
            status => Err(SuggestionError::search_failed(
                SearchKind::Places,
                match response.error_message {
                    Some(message) => format!("{}: {}", status, message),
                    None => status.to_string(),
                },
            )),
        }
    }
}

#[async_trait]
impl PlaceSearchService for PlaceSearchGoogle {
    async fn search_places(
        &self,
        request: &PlaceSearchRequest,
    ) -> Result<Vec<PlaceHit>, SuggestionError> {
        let failed = |details: String| SuggestionError::search_failed(SearchKind::Places, details);

        let mut params = vec![
            ("query", request.query.clone()),
            ("location", request.location.to_string()),
            ("radius", request.radius_meters.to_string()),
            ("key", self.client.api_key.clone()),
        ];
        if !request.language.trim().is_empty() {
            params.push(("language", request.language.clone()));
        }

        let response = self
            .client
            .client
            .get(&self.client.places_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| failed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(failed(format!("Places API returned {}", response.status())));
        }

        let data: TextSearchResponse = response
            .json()
            .await
            .map_err(|e| failed(e.to_string()))?;

        Self::into_hits(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> TextSearchResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn should_keep_service_order_including_unnamed_results() {
        let response = parse(
            r#"{
                "status": "OK",
                "results": [
                    {"name": "Shawarma House", "place_id": "a"},
                    {"place_id": "no-name"},
                    {"name": "Mama Noura", "rating": 4.5},
                    {"name": "Shawarmer"}
                ]
            }"#,
        );

        let hits = PlaceSearchGoogle::into_hits(response).unwrap();

        let names: Vec<_> = hits.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Shawarma House", "", "Mama Noura", "Shawarmer"]);
    }

    #[test]
    fn should_return_empty_when_zero_results() {
        let response = parse(r#"{"status": "ZERO_RESULTS", "results": []}"#);

        assert!(PlaceSearchGoogle::into_hits(response).unwrap().is_empty());
    }

    #[test]
    fn should_fail_when_request_denied() {
        let response = parse(
            r#"{"status": "REQUEST_DENIED", "results": [], "error_message": "The provided API key is invalid."}"#,
        );

        let err = PlaceSearchGoogle::into_hits(response).unwrap_err();

        assert_eq!(
            err,
            SuggestionError::SearchFailed {
                kind: SearchKind::Places,
                details: "REQUEST_DENIED: The provided API key is invalid.".to_string(),
            }
        );
    }

    #[test]
    fn should_fail_with_bare_status_when_no_error_message() {
        let response = parse(r#"{"status": "OVER_QUERY_LIMIT"}"#);

        let err = PlaceSearchGoogle::into_hits(response).unwrap_err();

        assert_eq!(err.details(), "OVER_QUERY_LIMIT");
    }
}
