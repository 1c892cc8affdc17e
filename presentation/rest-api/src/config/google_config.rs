use super::env::{process_env, required};

/// Credentials for Google Places and Custom Search.
pub struct GoogleConfig {
    pub api_key: String,
    pub search_engine_id: String,
}

impl GoogleConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(&process_env)
    }

    /// Environment variables:
    /// - GOOGLE_API_KEY (required)
    /// - GOOGLE_CX: Programmable Search Engine id (required)
    pub fn from_vars(var: &impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            api_key: required(var, "GOOGLE_API_KEY")?,
            search_engine_id: required(var, "GOOGLE_CX")?,
        })
    }
}
