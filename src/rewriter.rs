use crate::config::AiModelConfig;
use crate::error::AiError;
use crate::gemini::{GeminiClient, GenerateRequest, TextGenerator};
use crate::tone::Tone;

const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Rewrites text in a requested tone using a text-generation service.
pub struct ToneRewriter<G> {
    generator: G,
    api_key: Option<String>,
    model: String,
    temperature: f32,
}

impl ToneRewriter<GeminiClient> {
    pub fn from_config(config: &AiModelConfig) -> Self {
        Self::new(
            GeminiClient::new(config.endpoint.clone()),
            config.credential().map(str::to_string),
            config.model.clone(),
        )
        .with_temperature(config.temperature)
    }
}

impl<G: TextGenerator> ToneRewriter<G> {
    pub fn new(generator: G, api_key: Option<String>, model: String) -> Self {
        Self {
            generator,
            api_key,
            model,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn system_instruction(tone: Tone) -> String {
        format!(
            "You are an expert text editor. Your task is to rewrite the user's text to match a specific tone.\n\
            Tone: {}.\n\
            Maintain the original meaning but improve clarity and flow.\n\
            Do not add conversational filler. Just output the refined text.",
            tone
        )
    }

    /// Rewrite `text` in `tone`.
    ///
    /// Fails with [`AiError::Configuration`] before any request when no
    /// credential is set. An empty reply yields `text` unchanged.
    pub async fn rewrite(&self, text: &str, tone: Tone) -> Result<String, AiError> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AiError::Configuration(
                    "API key is missing. Please configure the environment.".to_string(),
                )
            })?;

        if text.is_empty() {
            return Ok(String::new());
        }

        let text_chars = text.chars().count();
        log::info!("Rewriter: rewriting {} chars in {} tone...", text_chars, tone);

        let request = GenerateRequest {
            model: self.model.clone(),
            api_key: api_key.to_string(),
            system_instruction: Self::system_instruction(tone),
            user_text: text.to_string(),
            temperature: self.temperature,
        };

        let result = match self.generator.generate(&request).await {
            Ok(result) => result,
            Err(e) => {
                log::error!("Rewriter: AI service error: {:#}", e);
                return Err(AiError::from(e));
            }
        };

        if result.is_empty() {
            log::warn!("Rewriter: empty response, keeping original text");
            return Ok(text.to_string());
        }

        log::info!(
            "Rewriter: text rewritten ({} → {} chars)",
            text_chars,
            result.chars().count()
        );
        Ok(result)
    }
}
