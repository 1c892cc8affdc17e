use poem_openapi::Object;

use business::domain::suggestion::model::{
    GeoPoint, MealSuggestion, PlaceResult, SuggestionRequest,
};

const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, Object)]
pub struct SuggestRequest {
    /// Free-text description of the user's mood or craving
    pub mood: String,
    /// Latitude of the user
    pub lat: f64,
    /// Longitude of the user
    pub lng: f64,
    /// Preferred language, e.g. "en" or "ar" (default: "en")
    pub lang: Option<String>,
}

impl From<SuggestRequest> for SuggestionRequest {
    fn from(dto: SuggestRequest) -> Self {
        Self {
            mood: dto.mood,
            location: GeoPoint::new(dto.lat, dto.lng),
            language: dto
                .lang
                .filter(|lang| !lang.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PlaceResponse {
    /// Venue name
    pub name: String,
    /// Maps link searching for the venue
    pub link: String,
}

impl From<PlaceResult> for PlaceResponse {
    fn from(place: PlaceResult) -> Self {
        Self {
            name: place.name,
            link: place.map_link,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SuggestionResponse {
    /// Meal name in English
    pub meal_en: String,
    /// Meal name in Arabic
    pub meal_ar: String,
    /// Recipe idea in English
    pub recipe_en: String,
    /// Recipe idea in Arabic
    pub recipe_ar: String,
    /// Up to three nearby places serving the meal
    pub places: Vec<PlaceResponse>,
    /// Image of the meal, empty when none was found
    #[oai(rename = "mealImage")]
    pub meal_image: String,
    /// How-to-cook video, empty when none was found
    #[oai(rename = "youtubeVideo")]
    pub youtube_video: String,
}

impl From<MealSuggestion> for SuggestionResponse {
    fn from(s: MealSuggestion) -> Self {
        Self {
            meal_en: s.meal_name_en,
            meal_ar: s.meal_name_ar,
            recipe_en: s.recipe_en,
            recipe_ar: s.recipe_ar,
            places: s.places.into_iter().map(|p| p.into()).collect(),
            meal_image: s.meal_image_url,
            youtube_video: s.tutorial_video_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem_openapi::types::ToJSON;

    #[test]
    fn should_default_language_when_missing() {
        let request: SuggestionRequest = SuggestRequest {
            mood: "tired".to_string(),
            lat: 24.71,
            lng: 46.67,
            lang: None,
        }
        .into();

        assert_eq!(request.language, "en");
        assert_eq!(request.location, GeoPoint::new(24.71, 46.67));
    }

    #[test]
    fn should_serialize_response_with_client_field_names() {
        let response: SuggestionResponse = MealSuggestion {
            meal_name_en: "Chicken Shawarma".to_string(),
            meal_name_ar: "شاورما دجاج".to_string(),
            recipe_en: "Grill spiced chicken".to_string(),
            recipe_ar: "اشوي الدجاج".to_string(),
            places: vec![PlaceResult::from_name("Shawarma House")],
            meal_image_url: String::new(),
            tutorial_video_url: "https://www.youtube.com/watch?v=x".to_string(),
        }
        .into();

        let json = response.to_json().unwrap();

        assert_eq!(json["meal_en"], "Chicken Shawarma");
        assert_eq!(json["places"][0]["name"], "Shawarma House");
        assert_eq!(
            json["places"][0]["link"],
            "https://www.google.com/maps/search/?api=1&query=Shawarma+House"
        );
        assert_eq!(json["mealImage"], "");
        assert_eq!(json["youtubeVideo"], "https://www.youtube.com/watch?v=x");
    }
}
