use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variables checked for the service credential, in order.
const API_KEY_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub ai_model: AiModelConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AiModelConfig {
    pub provider: String,
    pub model: String,
    pub endpoint: String,
    pub temperature: f32,
    pub api_key: Option<String>,
}

impl Default for AiModelConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemini-2.5-flash".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            temperature: 0.7,
            api_key: None,
        }
    }
}

impl AiModelConfig {
    /// The configured credential, treating a blank value as absent.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let mut config = Self::parse(&content)?;
        config.override_from_env();

        Ok(config)
    }

    /// Built-in defaults, with the credential taken from the environment
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.override_from_env();
        config
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    fn override_from_env(&mut self) {
        dotenv::dotenv().ok();

        let key = API_KEY_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty());

        if let Some(key) = key {
            self.ai_model.api_key = Some(key);
        }
    }
}
