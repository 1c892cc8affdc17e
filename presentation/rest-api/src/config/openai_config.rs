use super::env::{process_env, required};

const DEFAULT_MODEL: &str = "gpt-4o";

/// Configuration for OpenAI API access.
pub struct OpenAIConfig {
    pub api_key: String,
    pub model: String,
    /// Overrides the API base URL, e.g. for an OpenAI-compatible gateway.
    pub base_url: Option<String>,
}

impl OpenAIConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(&process_env)
    }

    /// Environment variables:
    /// - OPENAI_API_KEY (required)
    /// - OPENAI_MODEL (default: "gpt-4o")
    /// - OPENAI_BASE_URL (optional)
    pub fn from_vars(var: &impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            api_key: required(var, "OPENAI_API_KEY")?,
            model: var("OPENAI_MODEL")
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: var("OPENAI_BASE_URL").filter(|u| !u.trim().is_empty()),
        })
    }
}
