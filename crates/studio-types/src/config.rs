use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudioConfig {
    pub model: ModelConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
        }
    }
}

/// Generative-AI service configuration.
///
/// One provider serves all four capabilities; each capability has its own
/// model id because the service exposes them as separate models.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub provider: ModelProvider,
    pub chat_model: String,
    pub vision_model: String,
    pub embedding_model: String,
    pub api_key: String,
    pub api_base: Option<String>,
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            provider: ModelProvider::Google,
            chat_model: "gemini-1.5-flash".to_string(),
            vision_model: "gemini-1.5-flash".to_string(),
            embedding_model: "text-embedding-004".to_string(),
            // Build-time secret; a browser app has no runtime environment.
            api_key: option_env!("GEMINI_API_KEY").unwrap_or("").to_string(),
            api_base: None,
            max_output_tokens: 2048,
            temperature: 0.7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelProvider {
    Google,
    Custom,
}

impl ModelProvider {
    pub fn default_base_url(&self) -> &str {
        match self {
            ModelProvider::Google => "https://generativelanguage.googleapis.com",
            ModelProvider::Custom => "",
        }
    }

    pub fn all() -> &'static [ModelProvider] {
        &[ModelProvider::Google, ModelProvider::Custom]
    }

    pub fn label(&self) -> &str {
        match self {
            ModelProvider::Google => "Google",
            ModelProvider::Custom => "Custom",
        }
    }
}
