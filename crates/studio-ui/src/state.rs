//! UI-level state that drives rendering.
//! This is a projection of the session and adapter results, updated each
//! frame by draining the EventBus. Rendering it is side-effect-free: the
//! same state draws the same panels, with no service calls.

use studio_types::event::StudioEvent;
use studio_types::panel::Panel;

/// State visible to UI panels
pub struct UiState {
    /// Currently active panel — exactly one at a time
    pub active_panel: Panel,
    pub chat: ChatView,
    pub caption: CaptionView,
    pub embed: EmbedView,
    pub ask: AskView,
    /// Whether the settings panel is open
    pub show_settings: bool,
    /// Status line text
    pub status_text: String,
}

/// A chat entry for display
#[derive(Clone)]
pub struct ChatEntry {
    pub role: String,
    pub text: String,
    /// The exchange this user turn started never got a reply
    pub failed: bool,
}

#[derive(Default)]
pub struct ChatView {
    /// Displayed turns, replayed in order on every redraw
    pub entries: Vec<ChatEntry>,
    pub input: String,
    pub waiting: bool,
}

/// An uploaded image before decoding
#[derive(Clone)]
pub struct PickedImage {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Default)]
pub struct CaptionView {
    pub picked: Option<PickedImage>,
    /// 800×500 display copy, pending texture upload
    pub preview: Option<egui::ColorImage>,
    pub texture: Option<egui::TextureHandle>,
    pub caption: Option<String>,
    pub error: Option<String>,
    pub waiting: bool,
}

#[derive(Default)]
pub struct EmbedView {
    pub input: String,
    /// Raw representation from the embedding model, rendered as-is
    pub values: Option<Vec<f32>>,
    pub error: Option<String>,
    pub waiting: bool,
}

#[derive(Default)]
pub struct AskView {
    pub input: String,
    pub answer: Option<String>,
    pub error: Option<String>,
    pub waiting: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            active_panel: Panel::default(),
            chat: ChatView::default(),
            caption: CaptionView::default(),
            embed: EmbedView::default(),
            ask: AskView::default(),
            show_settings: false,
            status_text: "Ready".to_string(),
        }
    }

    /// Switch panels. In-progress input of the panels being left is
    /// discarded; the chat history survives because it belongs to the
    /// session, not the view. A view with a round-trip in flight keeps its
    /// fields so the result still has somewhere to land.
    pub fn select_panel(&mut self, panel: Panel) {
        if panel == self.active_panel {
            return;
        }
        self.active_panel = panel;
        self.chat.input.clear();
        if !self.caption.waiting {
            self.caption = CaptionView::default();
        }
        if !self.embed.waiting {
            self.embed = EmbedView::default();
        }
        if !self.ask.waiting {
            self.ask = AskView::default();
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<StudioEvent>) {
        for event in events {
            match event {
                StudioEvent::RequestStart { panel } => {
                    self.view_waiting(panel, true);
                    self.status_text = format!("Waiting for {}...", panel.label());
                }
                StudioEvent::ChatReply { text } => {
                    self.chat.entries.push(ChatEntry {
                        role: "assistant".to_string(),
                        text,
                        failed: false,
                    });
                    self.chat.waiting = false;
                    self.status_text = "Ready".to_string();
                }
                StudioEvent::ChatFailed { message } => {
                    if let Some(entry) = self
                        .chat
                        .entries
                        .iter_mut()
                        .rev()
                        .find(|e| e.role == "user")
                    {
                        entry.failed = true;
                    }
                    self.chat.entries.push(ChatEntry {
                        role: "error".to_string(),
                        text: message.clone(),
                        failed: false,
                    });
                    self.chat.waiting = false;
                    self.status_text = format!("Error: {}", message);
                }
                StudioEvent::CaptionReady { text } => {
                    self.caption.caption = Some(text);
                    self.caption.error = None;
                    self.caption.waiting = false;
                    self.status_text = "Ready".to_string();
                }
                StudioEvent::EmbeddingReady { values } => {
                    self.embed.values = Some(values);
                    self.embed.error = None;
                    self.embed.waiting = false;
                    self.status_text = "Ready".to_string();
                }
                StudioEvent::AnswerReady { text } => {
                    self.ask.answer = Some(text);
                    self.ask.error = None;
                    self.ask.waiting = false;
                    self.status_text = "Ready".to_string();
                }
                StudioEvent::RequestFailed { panel, message } => {
                    match panel {
                        Panel::ImageCaptioning => self.caption.error = Some(message.clone()),
                        Panel::EmbedText => self.embed.error = Some(message.clone()),
                        Panel::AskAnything => self.ask.error = Some(message.clone()),
                        // chat failures come in as ChatFailed
                        Panel::ChatBot => {}
                    }
                    self.view_waiting(panel, false);
                    self.status_text = format!("Error: {}", message);
                }
            }
        }
    }

    /// Add a user message to the chat display (optimistic echo)
    pub fn push_user_entry(&mut self, text: &str) {
        self.chat.entries.push(ChatEntry {
            role: "user".to_string(),
            text: text.to_string(),
            failed: false,
        });
    }

    /// Stage an uploaded image, clearing any previous decode results
    pub fn set_picked_image(&mut self, name: String, bytes: Vec<u8>) {
        log::debug!("image staged: {} ({} bytes)", name, bytes.len());
        self.caption.picked = Some(PickedImage { name, bytes });
        self.caption.preview = None;
        self.caption.texture = None;
        self.caption.caption = None;
        self.caption.error = None;
    }

    pub fn is_busy(&self) -> bool {
        self.chat.waiting || self.caption.waiting || self.embed.waiting || self.ask.waiting
    }

    fn view_waiting(&mut self, panel: Panel, waiting: bool) {
        match panel {
            Panel::ChatBot => self.chat.waiting = waiting,
            Panel::ImageCaptioning => self.caption.waiting = waiting,
            Panel::EmbedText => self.embed.waiting = waiting,
            Panel::AskAnything => self.ask.waiting = waiting,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
