//! WASM-target tests for studio-platform.
//!
//! The request/response plumbing is pure; the fetch path itself needs a
//! browser and is exercised manually. Runs under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use studio_platform::llm::GeminiProvider;
use studio_types::config::ModelConfig;

#[wasm_bindgen_test]
fn provider_builds_from_default_config() {
    let _provider = GeminiProvider::new(ModelConfig::default());
}

#[wasm_bindgen_test]
fn provider_accepts_base_url_override() {
    let config = ModelConfig {
        api_base: Some("http://localhost:8080".to_string()),
        ..ModelConfig::default()
    };
    let _provider = GeminiProvider::new(config);
}
