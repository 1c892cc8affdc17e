/// Maximum number of nearby places returned with a suggestion.
pub const MAX_PLACES: usize = 3;

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Geographic position of the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Inbound request: what the user feels like, where they are and which language they read.
#[derive(Debug, Clone)]
pub struct SuggestionRequest {
    pub mood: String,
    pub location: GeoPoint,
    pub language: String,
}

/// Labels shared by the prompt template and the reply parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealLabel {
    MealEn,
    MealAr,
    RecipeEn,
    RecipeAr,
}

impl MealLabel {
    pub const ALL: [MealLabel; 4] = [
        MealLabel::MealEn,
        MealLabel::MealAr,
        MealLabel::RecipeEn,
        MealLabel::RecipeAr,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealLabel::MealEn => "Meal_EN",
            MealLabel::MealAr => "Meal_AR",
            MealLabel::RecipeEn => "Recipe_EN",
            MealLabel::RecipeAr => "Recipe_AR",
        }
    }
}

impl std::fmt::Display for MealLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fields extracted from the generation reply. Any of them may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedMeal {
    pub meal_name_en: String,
    pub meal_name_ar: String,
    pub recipe_en: String,
    pub recipe_ar: String,
}

impl ParsedMeal {
    pub fn field(&self, label: MealLabel) -> &str {
        match label {
            MealLabel::MealEn => &self.meal_name_en,
            MealLabel::MealAr => &self.meal_name_ar,
            MealLabel::RecipeEn => &self.recipe_en,
            MealLabel::RecipeAr => &self.recipe_ar,
        }
    }

    /// A meal is complete when all four fields carry text.
    pub fn is_complete(&self) -> bool {
        self.missing_labels().is_empty()
    }

    pub fn missing_labels(&self) -> Vec<MealLabel> {
        MealLabel::ALL
            .into_iter()
            .filter(|label| self.field(*label).is_empty())
            .collect()
    }
}

/// A nearby venue serving the suggested meal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceResult {
    pub name: String,
    pub map_link: String,
}

impl PlaceResult {
    /// Builds the result with a maps deep link that searches for the venue by name.
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let encoded: String = url::form_urlencoded::byte_serialize(name.as_bytes()).collect();
        Self {
            map_link: format!("{}{}", MAPS_SEARCH_URL, encoded),
            name,
        }
    }
}

/// The final bilingual recommendation returned to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct MealSuggestion {
    pub meal_name_en: String,
    pub meal_name_ar: String,
    pub recipe_en: String,
    pub recipe_ar: String,
    pub places: Vec<PlaceResult>,
    /// Empty when no image was found.
    pub meal_image_url: String,
    /// Empty when no video was found.
    pub tutorial_video_url: String,
}

/// Reduced outcome of the three downstream searches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub places: Vec<PlaceResult>,
    pub meal_image_url: String,
    pub tutorial_video_url: String,
}

impl MealSuggestion {
    pub fn assemble(meal: ParsedMeal, results: SearchResults) -> Self {
        Self {
            meal_name_en: meal.meal_name_en,
            meal_name_ar: meal.meal_name_ar,
            recipe_en: meal.recipe_en,
            recipe_ar: meal.recipe_ar,
            places: results.places,
            meal_image_url: results.meal_image_url,
            tutorial_video_url: results.tutorial_video_url,
        }
    }
}

/// Which downstream search a result or failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Places,
    Image,
    Video,
}

impl std::fmt::Display for SearchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchKind::Places => write!(f, "places"),
            SearchKind::Image => write!(f, "image"),
            SearchKind::Video => write!(f, "video"),
        }
    }
}

/// Pipeline states of one suggestion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionStage {
    Received,
    Prompting,
    Parsing,
    Validating,
    Searching,
    Responded,
    Failed,
}

impl std::fmt::Display for SuggestionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionStage::Received => write!(f, "received"),
            SuggestionStage::Prompting => write!(f, "prompting"),
            SuggestionStage::Parsing => write!(f, "parsing"),
            SuggestionStage::Validating => write!(f, "validating"),
            SuggestionStage::Searching => write!(f, "searching"),
            SuggestionStage::Responded => write!(f, "responded"),
            SuggestionStage::Failed => write!(f, "failed"),
        }
    }
}

/// Tunables of the pipeline, supplied at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionSettings {
    pub search_radius_meters: u32,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        Self {
            search_radius_meters: 1000,
            temperature: 0.7,
            max_output_tokens: 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_meal() -> ParsedMeal {
        ParsedMeal {
            meal_name_en: "Chicken Shawarma".to_string(),
            meal_name_ar: "شاورما دجاج".to_string(),
            recipe_en: "Grill spiced chicken".to_string(),
            recipe_ar: "اشوي الدجاج".to_string(),
        }
    }

    #[test]
    fn should_be_complete_when_all_fields_present() {
        assert!(complete_meal().is_complete());
    }

    #[test]
    fn should_list_missing_labels_when_fields_empty() {
        let meal = ParsedMeal {
            meal_name_ar: String::new(),
            recipe_ar: String::new(),
            ..complete_meal()
        };

        assert!(!meal.is_complete());
        assert_eq!(
            meal.missing_labels(),
            vec![MealLabel::MealAr, MealLabel::RecipeAr]
        );
    }

    #[test]
    fn should_encode_place_name_into_map_link() {
        let place = PlaceResult::from_name("Shawarma House & Grill");

        assert_eq!(place.name, "Shawarma House & Grill");
        assert_eq!(
            place.map_link,
            "https://www.google.com/maps/search/?api=1&query=Shawarma+House+%26+Grill"
        );
    }

    #[test]
    fn should_format_geo_point_as_lat_lng() {
        assert_eq!(GeoPoint::new(24.71, 46.67).to_string(), "24.71,46.67");
    }

    #[test]
    fn should_assemble_suggestion_from_meal_and_results() {
        let results = SearchResults {
            places: vec![PlaceResult::from_name("Mama Noura")],
            meal_image_url: "https://img.example/shawarma.jpg".to_string(),
            tutorial_video_url: String::new(),
        };

        let suggestion = MealSuggestion::assemble(complete_meal(), results);

        assert_eq!(suggestion.meal_name_en, "Chicken Shawarma");
        assert_eq!(suggestion.places.len(), 1);
        assert_eq!(suggestion.meal_image_url, "https://img.example/shawarma.jpg");
        assert!(suggestion.tutorial_video_url.is_empty());
    }

    #[test]
    fn should_use_default_settings() {
        let settings = SuggestionSettings::default();
        assert_eq!(settings.search_radius_meters, 1000);
        assert_eq!(settings.max_output_tokens, 400);
    }
}
