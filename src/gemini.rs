use anyhow::{Context, Result};

/// Everything the service needs for one generation.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub model: String,
    pub api_key: String,
    pub system_instruction: String,
    pub user_text: String,
    pub temperature: f32,
}

/// A stateless text-generation backend: one request in, one text out.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<String>;
}

/// HTTP client for the Gemini `generateContent` API.
pub struct GeminiClient {
    pub endpoint: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(endpoint: String) -> Self {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    /// Use a preconfigured HTTP client (timeouts, proxies).
    pub fn with_client(endpoint: String, client: reqwest::Client) -> Self {
        Self { endpoint, client }
    }

    fn url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            model
        )
    }

    fn body(request: &GenerateRequest) -> serde_json::Value {
        serde_json::json!({
            "systemInstruction": {
                "parts": [{ "text": request.system_instruction }]
            },
            "contents": [
                { "role": "user", "parts": [{ "text": request.user_text }] }
            ],
            "generationConfig": {
                "temperature": request.temperature
            }
        })
    }

    /// Concatenate the text parts of the first candidate. Missing text is `""`.
    fn extract_text(response: &serde_json::Value) -> String {
        response["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<String> {
        let response = self
            .client
            .post(self.url(&request.model))
            .header("x-goog-api-key", &request.api_key)
            .json(&Self::body(request))
            .send()
            .await
            .context("Failed to send request to Gemini")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API error ({}): {}", status, error_text);
        }

        let response_json: serde_json::Value = response
            .json()
            .await
            .context("Failed to parse Gemini response")?;

        Ok(Self::extract_text(&response_json))
    }
}
