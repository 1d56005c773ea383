//! Chat session lifecycle and history management.
//!
//! One session per browser session, created lazily on first use of the chat
//! panel and never persisted. The session exclusively owns its turn
//! sequence; the UI renders a projection of it and nothing else mutates it.
//!
//! An exchange runs in three steps so the caller can await the service
//! round-trip without holding a borrow:
//! 1. `begin_exchange` appends the user turn (optimistic echo) and hands
//!    back the prior history for the request,
//! 2. `complete_exchange` appends the reply on success,
//! 3. `fail_exchange` marks the pending user turn failed on error —
//!    no assistant turn is appended and nothing is rolled back.

use studio_types::message::{Role, Turn, TurnStatus};

/// An in-memory conversation, append-only for its whole life.
pub struct ChatSession {
    id: String,
    created_at: String,
    turns: Vec<Turn>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            turns: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// The full history, in order. Reading it is side-effect-free: replaying
    /// the same session twice yields the same sequence and triggers no
    /// service calls.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Append the user's message and return the history as it stood before
    /// it — the context the conversational model expects alongside the new
    /// message.
    pub fn begin_exchange(&mut self, text: &str) -> Vec<Turn> {
        let prior = self.turns.clone();
        self.turns.push(Turn::user(text));
        prior
    }

    /// Append the assistant's reply, completing the pending exchange.
    pub fn complete_exchange(&mut self, reply: Turn) {
        self.turns.push(reply);
    }

    /// Mark the pending user turn as failed. The turn stays visible in the
    /// history; no assistant turn is paired with it.
    pub fn fail_exchange(&mut self) {
        if let Some(last) = self.turns.last_mut() {
            if last.role == Role::User && last.status == TurnStatus::Complete {
                last.status = TurnStatus::Failed;
                log::debug!("chat exchange failed, turn {} marked", self.turns.len());
            }
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
