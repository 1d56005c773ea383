//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `studio-core` (pure Rust).
//! Implementations live in `studio-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.
//!
//! One trait per external capability: the hosted service exposes a
//! conversational model, a vision model, an embedding model, and a
//! single-turn text model, and each panel talks to exactly one of them.

use async_trait::async_trait;
use studio_types::{message::Turn, Result};

/// An encoded image ready to cross the service boundary.
/// Always the ORIGINAL uploaded bytes — the 800×500 preview copy is for
/// display only and never leaves the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime: String,
    pub bytes: Vec<u8>,
}

// ─── Conversational model ────────────────────────────────────

#[async_trait(?Send)]
pub trait ChatPort {
    /// Send one user message with the full prior history as context.
    /// Returns the assistant's reply turn, wire role already translated.
    async fn send(&self, history: &[Turn], text: &str) -> Result<Turn>;
}

// ─── Vision captioning model ─────────────────────────────────

/// The captioning panel always sends this fixed instruction.
pub const CAPTION_INSTRUCTION: &str = "write a short caption for this image";

#[async_trait(?Send)]
pub trait VisionPort {
    async fn caption(&self, instruction: &str, image: &ImagePayload) -> Result<String>;
}

// ─── Embedding model ─────────────────────────────────────────

#[async_trait(?Send)]
pub trait EmbedPort {
    /// Embed arbitrary text, empty input included. The representation is
    /// rendered as-is downstream; no dimensionality contract here.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

// ─── Single-turn text model ──────────────────────────────────

#[async_trait(?Send)]
pub trait GeneratePort {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
