use serde::{Deserialize, Serialize};

/// The four views reachable from the sidebar menu.
///
/// The set is closed: the router renders exactly one panel per variant and
/// the menu widget cannot produce anything outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panel {
    ChatBot,
    ImageCaptioning,
    EmbedText,
    AskAnything,
}

impl Panel {
    pub fn all() -> &'static [Panel] {
        &[
            Panel::ChatBot,
            Panel::ImageCaptioning,
            Panel::EmbedText,
            Panel::AskAnything,
        ]
    }

    /// Menu label, as shown in the sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            Panel::ChatBot => "ChatBot",
            Panel::ImageCaptioning => "Image Captioning",
            Panel::EmbedText => "Embed text",
            Panel::AskAnything => "Ask me anything",
        }
    }

    /// Heading shown at the top of the panel itself.
    pub fn title(&self) -> &'static str {
        match self {
            Panel::ChatBot => "🤖 ChatBox",
            Panel::ImageCaptioning => "🖼 Snap Narrate",
            Panel::EmbedText => "🔤 Embed Text",
            Panel::AskAnything => "❓ Ask me anything",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Panel::ChatBot => "💬",
            Panel::ImageCaptioning => "🖼",
            Panel::EmbedText => "🔤",
            Panel::AskAnything => "❓",
        }
    }
}

impl Default for Panel {
    fn default() -> Self {
        Panel::ChatBot
    }
}
