use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::{
    MAX_PLACES, PlaceResult, SearchKind, SearchResults, SuggestionRequest,
};
use crate::domain::suggestion::queries::SearchQueries;
use crate::domain::suggestion::services::{
    PlaceSearchRequest, PlaceSearchService, WebHit, WebSearchService, WebSearchType,
};

/// Runs the places, image and video searches for one meal and reduces them to
/// the response shape. Empty results are fine; any failed call fails the whole set.
pub struct MealSearchAggregator {
    pub places: Arc<dyn PlaceSearchService>,
    pub web_search: Arc<dyn WebSearchService>,
    pub logger: Arc<dyn Logger>,
}

impl MealSearchAggregator {
    pub async fn gather(
        &self,
        queries: &SearchQueries,
        request: &SuggestionRequest,
        radius_meters: u32,
    ) -> Result<SearchResults, SuggestionError> {
        let place_request = PlaceSearchRequest {
            query: queries.places.clone(),
            location: request.location,
            radius_meters,
            language: request.language.clone(),
        };

        // All three calls are awaited to completion before any failure is reported.
        let (places, image, video) = tokio::join!(
            self.places.search_places(&place_request),
            self.web_search.search(&queries.image, WebSearchType::Image),
            self.web_search.search(&queries.video, WebSearchType::General),
        );

        let places = self.checked(SearchKind::Places, places)?;
        let image = self.checked(SearchKind::Image, image)?;
        let video = self.checked(SearchKind::Video, video)?;

        let places: Vec<PlaceResult> = places
            .into_iter()
            .take(MAX_PLACES)
            .map(|hit| PlaceResult::from_name(hit.name))
            .collect();
        let meal_image_url = first_link(image);
        let tutorial_video_url = first_link(video);

        if meal_image_url.is_empty() {
            self.logger
                .info(&format!("No image found for: {}", queries.image));
        }
        if tutorial_video_url.is_empty() {
            self.logger
                .info(&format!("No video found for: {}", queries.video));
        }

        Ok(SearchResults {
            places,
            meal_image_url,
            tutorial_video_url,
        })
    }

    fn checked<T>(
        &self,
        kind: SearchKind,
        result: Result<T, SuggestionError>,
    ) -> Result<T, SuggestionError> {
        result.map_err(|err| {
            let err = SuggestionError::search_failed(kind, err.details());
            self.logger.error(&format!(
                "{} search failed: {}",
                kind,
                err.details()
            ));
            err
        })
    }
}

fn first_link(hits: Vec<WebHit>) -> String {
    hits.into_iter()
        .next()
        .map(|hit| hit.link)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::suggestion::model::{GeoPoint, SuggestionStage};
    use crate::domain::suggestion::services::PlaceHit;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub Places {}

        #[async_trait]
        impl PlaceSearchService for Places {
            async fn search_places(
                &self,
                request: &PlaceSearchRequest,
            ) -> Result<Vec<PlaceHit>, SuggestionError>;
        }
    }

    mock! {
        pub WebSearch {}

        #[async_trait]
        impl WebSearchService for WebSearch {
            async fn search(
                &self,
                query: &str,
                search_type: WebSearchType,
            ) -> Result<Vec<WebHit>, SuggestionError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
            fn stage(&self, stage: SuggestionStage);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        logger.expect_stage().returning(|_| ());
        Arc::new(logger)
    }

    fn request() -> SuggestionRequest {
        SuggestionRequest {
            mood: "I'm craving something spicy".to_string(),
            location: GeoPoint::new(24.71, 46.67),
            language: "en".to_string(),
        }
    }

    fn hits(names: &[&str]) -> Vec<PlaceHit> {
        names
            .iter()
            .map(|name| PlaceHit {
                name: name.to_string(),
            })
            .collect()
    }

    fn web_hits(links: &[&str]) -> Vec<WebHit> {
        links
            .iter()
            .map(|link| WebHit {
                link: link.to_string(),
            })
            .collect()
    }

    fn web_search_returning(
        image: Vec<WebHit>,
        video: Vec<WebHit>,
    ) -> MockWebSearch {
        let mut web = MockWebSearch::new();
        web.expect_search()
            .withf(|_, search_type| *search_type == WebSearchType::Image)
            .return_once(move |_, _| Ok(image));
        web.expect_search()
            .withf(|_, search_type| *search_type == WebSearchType::General)
            .return_once(move |_, _| Ok(video));
        web
    }

    fn aggregator(places: MockPlaces, web: MockWebSearch) -> MealSearchAggregator {
        MealSearchAggregator {
            places: Arc::new(places),
            web_search: Arc::new(web),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_cap_places_at_three_in_service_order() {
        let mut places = MockPlaces::new();
        places
            .expect_search_places()
            .returning(|_| Ok(hits(&["First", "Second", "Third", "Fourth", "Fifth"])));

        let aggregator = aggregator(
            places,
            web_search_returning(web_hits(&["https://img/1"]), web_hits(&["https://yt/1"])),
        );

        let results = aggregator
            .gather(&SearchQueries::derive("Chicken Shawarma"), &request(), 1000)
            .await
            .unwrap();

        let names: Vec<_> = results.places.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
        assert_eq!(
            results.places[0].map_link,
            "https://www.google.com/maps/search/?api=1&query=First"
        );
    }

    #[tokio::test]
    async fn should_send_derived_queries_and_location_to_services() {
        let mut places = MockPlaces::new();
        places
            .expect_search_places()
            .withf(|req| {
                req.query == "restaurant Chicken Shawarma"
                    && req.location == GeoPoint::new(24.71, 46.67)
                    && req.radius_meters == 1500
                    && req.language == "en"
            })
            .times(1)
            .returning(|_| Ok(vec![]));

        let mut web = MockWebSearch::new();
        web.expect_search()
            .withf(|query, search_type| {
                query == "meal name Chicken Shawarma" && *search_type == WebSearchType::Image
            })
            .times(1)
            .returning(|_, _| Ok(vec![]));
        web.expect_search()
            .withf(|query, search_type| {
                query == "how to make Chicken Shawarma site:youtube.com"
                    && *search_type == WebSearchType::General
            })
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let result = aggregator(places, web)
            .gather(&SearchQueries::derive("Chicken Shawarma"), &request(), 1500)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_take_first_image_and_video_links() {
        let mut places = MockPlaces::new();
        places.expect_search_places().returning(|_| Ok(vec![]));

        let results = aggregator(
            places,
            web_search_returning(
                web_hits(&["https://img/first.jpg", "https://img/second.jpg"]),
                web_hits(&["https://youtube.com/watch?v=a", "https://youtube.com/watch?v=b"]),
            ),
        )
        .gather(&SearchQueries::derive("Kabsa"), &request(), 1000)
        .await
        .unwrap();

        assert!(results.places.is_empty());
        assert_eq!(results.meal_image_url, "https://img/first.jpg");
        assert_eq!(results.tutorial_video_url, "https://youtube.com/watch?v=a");
    }

    #[tokio::test]
    async fn should_leave_image_and_video_empty_when_nothing_found() {
        let mut places = MockPlaces::new();
        places
            .expect_search_places()
            .returning(|_| Ok(hits(&["Only One"])));

        let results = aggregator(places, web_search_returning(vec![], vec![]))
            .gather(&SearchQueries::derive("Kabsa"), &request(), 1000)
            .await
            .unwrap();

        assert_eq!(results.places.len(), 1);
        assert!(results.meal_image_url.is_empty());
        assert!(results.tutorial_video_url.is_empty());
    }

    #[tokio::test]
    async fn should_fail_when_video_search_fails() {
        let mut places = MockPlaces::new();
        places
            .expect_search_places()
            .returning(|_| Ok(hits(&["Shawarma House"])));

        let mut web = MockWebSearch::new();
        web.expect_search()
            .withf(|_, search_type| *search_type == WebSearchType::Image)
            .returning(|_, _| Ok(web_hits(&["https://img/1"])));
        web.expect_search()
            .withf(|_, search_type| *search_type == WebSearchType::General)
            .returning(|_, _| {
                Err(SuggestionError::search_failed(
                    SearchKind::Image,
                    "status 503",
                ))
            });

        let result = aggregator(places, web)
            .gather(&SearchQueries::derive("Kabsa"), &request(), 1000)
            .await;

        assert_eq!(
            result.unwrap_err(),
            SuggestionError::SearchFailed {
                kind: SearchKind::Video,
                details: "status 503".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn should_fail_when_places_search_fails() {
        let mut places = MockPlaces::new();
        places.expect_search_places().returning(|_| {
            Err(SuggestionError::search_failed(
                SearchKind::Places,
                "REQUEST_DENIED",
            ))
        });

        let result = aggregator(
            places,
            web_search_returning(web_hits(&["https://img/1"]), vec![]),
        )
        .gather(&SearchQueries::derive("Kabsa"), &request(), 1000)
        .await;

        assert!(matches!(
            result.unwrap_err(),
            SuggestionError::SearchFailed {
                kind: SearchKind::Places,
                ..
            }
        ));
    }
}
