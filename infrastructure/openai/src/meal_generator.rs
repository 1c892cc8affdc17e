use async_trait::async_trait;
use serde_json::{Value, json};

use business::domain::suggestion::errors::SuggestionError;
use business::domain::suggestion::services::{GenerationRequest, MealGeneratorService};

use crate::client::OpenAIClient;

pub struct MealGeneratorOpenAI {
    client: OpenAIClient,
}

impl MealGeneratorOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn build_body(&self, request: &GenerationRequest) -> Value {
        json!({
            "model": self.client.model,
            "messages": [
                {"role": "system", "content": request.prompt.system},
                {"role": "user", "content": request.prompt.user},
            ],
            "temperature": request.temperature,
            "max_tokens": request.max_output_tokens,
        })
    }

    /// Pulls the first choice's message text out of a chat completion payload.
    fn extract_content(data: &Value) -> Result<String, SuggestionError> {
        data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .map(|content| content.trim().to_string())
            .ok_or_else(|| {
                SuggestionError::generation_failed("chat completion contained no message content")
            })
    }
}

#[async_trait]
impl MealGeneratorService for MealGeneratorOpenAI {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, SuggestionError> {
        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&self.build_body(request))
            .send()
            .await
            .map_err(|e| SuggestionError::generation_failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SuggestionError::generation_failed(format!(
                "OpenAI returned {}: {}",
                status, body
            )));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| SuggestionError::generation_failed(e.to_string()))?;

        Self::extract_content(&data)
    }
}
