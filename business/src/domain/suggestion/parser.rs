//! Line grammar for the generation reply.
//!
//! ```text
//! line  := label rest
//! rest  := any text up to the first ':' , then value until end of line
//! ```
//!
//! Each label takes its value from the first line starting with it; an indented line
//! does not count. Lines may come in any order and be mixed with unrelated text; later lines
//! carrying the same label are ignored.

use super::model::{MealLabel, ParsedMeal};

/// Extracts the four labeled fields. Never fails: absent labels yield empty fields.
pub fn parse_meal(reply: &str) -> ParsedMeal {
    ParsedMeal {
        meal_name_en: find_label_value(reply, MealLabel::MealEn),
        meal_name_ar: find_label_value(reply, MealLabel::MealAr),
        recipe_en: find_label_value(reply, MealLabel::RecipeEn),
        recipe_ar: find_label_value(reply, MealLabel::RecipeAr),
    }
}

/// Value of the first line starting with `label`, or empty when there is no such line
/// or it has nothing after its first colon.
pub fn find_label_value(reply: &str, label: MealLabel) -> String {
    reply
        .lines()
        .find(|line| line.starts_with(label.as_str()))
        .and_then(|line| line.split_once(':'))
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default()
}
