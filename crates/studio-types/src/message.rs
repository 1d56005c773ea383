use serde::{Deserialize, Serialize};

/// Translate a wire-format role name into its display name.
///
/// The conversational service labels the model's own turns `"model"`;
/// everything else passes through unchanged.
pub fn display_role(wire_role: &str) -> &str {
    match wire_role {
        "model" => "assistant",
        other => other,
    }
}

/// Role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Parse a wire-format role. Unknown roles are treated as the model's,
    /// mirroring how the service only ever labels its side of the exchange.
    pub fn from_wire(wire_role: &str) -> Self {
        match display_role(wire_role) {
            "user" => Role::User,
            _ => Role::Assistant,
        }
    }

    /// Role name as the wire format expects it.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "model",
        }
    }

    /// Role name as the UI displays it.
    pub fn as_display(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// Outcome of the exchange a turn belongs to.
///
/// A user turn whose exchange never received a reply is `Failed`; it stays
/// in the history so the user sees what was sent, visibly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnStatus {
    Complete,
    Failed,
}

/// A single message in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
    pub status: TurnStatus,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            status: TurnStatus::Complete,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            status: TurnStatus::Complete,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == TurnStatus::Failed
    }
}
