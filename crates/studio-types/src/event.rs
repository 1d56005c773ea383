use serde::{Deserialize, Serialize};
use crate::panel::Panel;

/// Events emitted by the async adapter tasks.
/// UI drains these each frame for reactive updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StudioEvent {
    /// A service round-trip started for the given panel
    RequestStart { panel: Panel },

    /// The conversational model replied to a chat exchange
    ChatReply { text: String },

    /// A chat exchange failed; the pending user turn stays, marked failed
    ChatFailed { message: String },

    /// The vision model produced a caption
    CaptionReady { text: String },

    /// The embedding model returned a representation
    EmbeddingReady { values: Vec<f32> },

    /// The single-turn model answered a free-form prompt
    AnswerReady { text: String },

    /// A non-chat request failed; shown inline on the owning panel
    RequestFailed { panel: Panel, message: String },
}
