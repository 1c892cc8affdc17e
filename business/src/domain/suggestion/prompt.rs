use super::model::MealLabel;

pub const SYSTEM_PROMPT: &str =
    "You are a food recommendation assistant who replies in English and Arabic.";

/// Instruction pair sent to the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPrompt {
    pub system: String,
    pub user: String,
}

/// Embeds the mood verbatim and asks for exactly the four labeled lines the parser reads.
pub fn build_prompt(mood: &str) -> GenerationPrompt {
    let format_lines = MealLabel::ALL
        .iter()
        .map(|label| format!("{}: ...", label))
        .collect::<Vec<_>>()
        .join("\n");

    let user = format!(
        r#"User says: "{}"
Respond with:
1. Meal suggestion in English and Arabic (only the meal name)
2. Recipe idea in English and Arabic (if cooking at home)
Respond in format:
{}"#,
        mood, format_lines
    );

    GenerationPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
    }
}
