use std::time::Duration;

use reqwest::Client;

const PLACES_TEXT_SEARCH_URL: &str =
    "https://maps.googleapis.com/maps/api/place/textsearch/json";
const CUSTOM_SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Shared Google API HTTP client and credentials.
/// One API key serves both Places and Custom Search; `search_engine_id` is the
/// Programmable Search Engine (cx) used for image and video lookups.
#[derive(Clone)]
pub struct GoogleClient {
    pub client: Client,
    pub api_key: String,
    pub search_engine_id: String,
    pub places_url: String,
    pub custom_search_url: String,
}

impl GoogleClient {
    pub fn new(api_key: String, search_engine_id: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            search_engine_id,
            places_url: PLACES_TEXT_SEARCH_URL.to_string(),
            custom_search_url: CUSTOM_SEARCH_URL.to_string(),
        }
    }
}
