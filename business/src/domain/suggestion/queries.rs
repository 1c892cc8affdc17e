/// Number of meal-name tokens kept for the places and image queries.
///
/// Long generated dish names match poorly on search engines, so only the head of the
/// name is used. This can drop the distinguishing word ("Grilled Lemon Chicken" searches
/// as "Grilled Lemon"); the video query keeps the full name.
pub const QUERY_TOKEN_LIMIT: usize = 2;

/// Search strings derived from the English meal name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQueries {
    pub places: String,
    pub image: String,
    pub video: String,
}

impl SearchQueries {
    pub fn derive(meal_name_en: &str) -> Self {
        let head = leading_tokens(meal_name_en, QUERY_TOKEN_LIMIT);

        Self {
            places: format!("restaurant {}", head),
            image: format!("meal name {}", head),
            video: format!("how to make {} site:youtube.com", meal_name_en),
        }
    }
}

fn leading_tokens(text: &str, limit: usize) -> String {
    text.split_whitespace()
        .take(limit)
        .collect::<Vec<_>>()
        .join(" ")
}
