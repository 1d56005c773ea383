//! Generative Language API adapter.
//!
//! One provider serves all four capabilities: conversational chat, vision
//! captioning, text embedding, and single-turn generation. Each is a
//! separate model behind the same REST surface (`:generateContent` /
//! `:embedContent`).
//! Uses browser `fetch()` via gloo-net for WASM compatibility.

use async_trait::async_trait;
use base64::Engine as _;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::{json, Value};

use studio_core::ports::*;
use studio_types::{
    config::ModelConfig,
    message::{Role, Turn, TurnStatus},
    Result, StudioError,
};

/// Provider speaking the Generative Language REST protocol.
pub struct GeminiProvider {
    config: ModelConfig,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(config: ModelConfig) -> Self {
        let base_url = config
            .api_base
            .clone()
            .unwrap_or_else(|| config.provider.default_base_url().to_string());
        Self { config, base_url }
    }

    fn generate_url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    fn embed_url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:embedContent", self.base_url, model)
    }

    async fn post(&self, url: &str, body: &Value) -> Result<gloo_net::http::Response> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(body)
            .map_err(|e| StudioError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| StudioError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            log::error!("service returned HTTP {} for {}", status, url);
            return Err(StudioError::Model(format!("HTTP {}: {}", status, text)));
        }

        Ok(response)
    }

    async fn generate_content(&self, model: &str, body: &Value) -> Result<Turn> {
        let response = self.post(&self.generate_url(model), body).await?;
        let data: GenerateResponse = response
            .json()
            .await
            .map_err(|e| StudioError::Model(e.to_string()))?;
        parse_reply(data)
    }
}

#[async_trait(?Send)]
impl ChatPort for GeminiProvider {
    async fn send(&self, history: &[Turn], text: &str) -> Result<Turn> {
        let body = build_chat_body(&self.config, history, text);
        self.generate_content(&self.config.chat_model, &body).await
    }
}

#[async_trait(?Send)]
impl VisionPort for GeminiProvider {
    async fn caption(&self, instruction: &str, image: &ImagePayload) -> Result<String> {
        let body = build_caption_body(&self.config, instruction, image);
        let reply = self
            .generate_content(&self.config.vision_model, &body)
            .await?;
        Ok(reply.text)
    }
}

#[async_trait(?Send)]
impl EmbedPort for GeminiProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let body = build_embed_body(&self.config.embedding_model, text);
        let response = self
            .post(&self.embed_url(&self.config.embedding_model), &body)
            .await?;
        let data: EmbedResponse = response
            .json()
            .await
            .map_err(|e| StudioError::Model(e.to_string()))?;
        Ok(data.embedding.values)
    }
}

#[async_trait(?Send)]
impl GeneratePort for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = build_chat_body(&self.config, &[], prompt);
        let reply = self.generate_content(&self.config.chat_model, &body).await?;
        Ok(reply.text)
    }
}

// ─── API response types ──────────────────────────────────────

#[derive(Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<ApiCandidate>,
}

#[derive(Deserialize)]
pub(crate) struct ApiCandidate {
    content: Option<ApiContent>,
}

#[derive(Deserialize)]
pub(crate) struct ApiContent {
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ApiPart>,
}

#[derive(Deserialize)]
pub(crate) struct ApiPart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct EmbedResponse {
    embedding: ApiEmbedding,
}

#[derive(Deserialize)]
pub(crate) struct ApiEmbedding {
    values: Vec<f32>,
}

// ─── Serialization helpers ───────────────────────────────────

fn generation_config(config: &ModelConfig) -> Value {
    json!({
        "temperature": config.temperature,
        "maxOutputTokens": config.max_output_tokens,
    })
}

fn turn_to_content(turn: &Turn) -> Value {
    json!({
        "role": turn.role.as_wire(),
        "parts": [{ "text": turn.text }],
    })
}

pub(crate) fn build_chat_body(config: &ModelConfig, history: &[Turn], text: &str) -> Value {
    let mut contents: Vec<Value> = history.iter().map(turn_to_content).collect();
    contents.push(json!({
        "role": "user",
        "parts": [{ "text": text }],
    }));

    json!({
        "contents": contents,
        "generationConfig": generation_config(config),
    })
}

pub(crate) fn build_caption_body(
    config: &ModelConfig,
    instruction: &str,
    image: &ImagePayload,
) -> Value {
    let data = base64::engine::general_purpose::STANDARD.encode(&image.bytes);
    json!({
        "contents": [{
            "role": "user",
            "parts": [
                { "text": instruction },
                { "inline_data": { "mime_type": image.mime, "data": data } },
            ],
        }],
        "generationConfig": generation_config(config),
    })
}

pub(crate) fn build_embed_body(model: &str, text: &str) -> Value {
    json!({
        "model": format!("models/{}", model),
        "content": { "parts": [{ "text": text }] },
    })
}

pub(crate) fn parse_reply(data: GenerateResponse) -> Result<Turn> {
    let candidate = data
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| StudioError::Model("no candidates in response".to_string()))?;

    let content = candidate
        .content
        .ok_or_else(|| StudioError::Model("candidate without content".to_string()))?;

    // The service labels its side of the exchange "model"
    let role = Role::from_wire(content.role.as_deref().unwrap_or("model"));
    let text: String = content
        .parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect::<Vec<_>>()
        .join("");

    Ok(Turn {
        role,
        text,
        status: TurnStatus::Complete,
    })
}
