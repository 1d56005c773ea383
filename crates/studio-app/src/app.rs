//! Main egui application — routes the sidebar selection to one panel and
//! dispatches panel actions onto async service calls.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, ColorImage, RichText, SidePanel, TopBottomPanel};

use studio_core::event_bus::EventBus;
use studio_core::picture;
use studio_core::ports::{ChatPort, EmbedPort, GeneratePort, VisionPort, CAPTION_INSTRUCTION};
use studio_core::session::ChatSession;
use studio_platform::llm::GeminiProvider;
use studio_types::config::StudioConfig;
use studio_types::event::StudioEvent;
use studio_types::panel::Panel;
use studio_ui::panels::{ask, caption, chat, embed, settings, sidebar};
use studio_ui::panels::caption::CaptionAction;
use studio_ui::state::UiState;
use studio_ui::theme;

/// The main application state
pub struct StudioApp {
    ui_state: UiState,
    config: StudioConfig,
    event_bus: EventBus,
    provider: Rc<GeminiProvider>,
    /// Lazily created, one per browser session, never persisted
    chat_session: Option<Rc<RefCell<ChatSession>>>,
    /// Landing slot for the async file picker
    picked_slot: Rc<RefCell<Option<(String, Vec<u8>)>>>,
    first_frame: bool,
}

impl StudioApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = StudioConfig::default();
        let provider = Rc::new(GeminiProvider::new(config.model.clone()));

        Self {
            ui_state: UiState::new(),
            config,
            event_bus: EventBus::new(),
            provider,
            chat_session: None,
            picked_slot: Rc::new(RefCell::new(None)),
            first_frame: true,
        }
    }

    /// Create-or-fetch the chat session. The Uninitialized → Active
    /// transition happens here, exactly once per browser session.
    fn chat_session(&mut self) -> Rc<RefCell<ChatSession>> {
        self.chat_session
            .get_or_insert_with(|| {
                let session = ChatSession::new();
                log::info!("chat session {} created", session.id());
                Rc::new(RefCell::new(session))
            })
            .clone()
    }

    fn rebuild_provider(&mut self) {
        self.provider = Rc::new(GeminiProvider::new(self.config.model.clone()));
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Collect the file picker result, if any
        if let Some((name, bytes)) = self.picked_slot.borrow_mut().take() {
            self.ui_state.set_picked_image(name, bytes);
        }

        // Images dropped onto the window count as uploads too
        if self.ui_state.active_panel == Panel::ImageCaptioning {
            let dropped = ctx.input(|i| i.raw.dropped_files.clone());
            for file in dropped {
                if let Some(bytes) = file.bytes {
                    self.ui_state.set_picked_image(file.name.clone(), bytes.to_vec());
                    break;
                }
            }
        }

        // Drain events from the adapter tasks
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Gemini Studio")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                ui.label(
                    RichText::new(format!(
                        "Provider: {} | Chat: {}",
                        self.config.model.provider.label(),
                        self.config.model.chat_model
                    ))
                    .color(theme::TEXT_SECONDARY)
                    .small(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.ui_state.show_settings, "Settings")
                        .clicked()
                    {
                        self.ui_state.show_settings = !self.ui_state.show_settings;
                    }
                });
            });
        });

        // ── Sidebar menu (panel router) ──────────────────────
        SidePanel::left("sidebar")
            .min_width(180.0)
            .max_width(220.0)
            .show(ctx, |ui| {
                if let Some(panel) = sidebar::sidebar(ui, &self.ui_state) {
                    self.ui_state.select_panel(panel);
                }
            });

        // ── Settings side panel ──────────────────────────────
        if self.ui_state.show_settings {
            SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| {
                    if settings::settings_panel(ui, &mut self.config) {
                        self.rebuild_provider();
                    }
                });
        }

        // ── Active panel ─────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| match self.ui_state.active_panel {
            Panel::ChatBot => {
                if let Some(text) = chat::chat_panel(ui, &mut self.ui_state) {
                    self.dispatch_chat(text, ctx);
                }
            }
            Panel::ImageCaptioning => {
                match caption::caption_panel(ui, &mut self.ui_state) {
                    Some(CaptionAction::PickImage) => self.dispatch_pick_image(ctx),
                    Some(CaptionAction::GenerateCaption) => self.dispatch_caption(ctx),
                    None => {}
                }
            }
            Panel::EmbedText => {
                if let Some(text) = embed::embed_panel(ui, &mut self.ui_state) {
                    self.dispatch_embed(text, ctx);
                }
            }
            Panel::AskAnything => {
                if let Some(prompt) = ask::ask_panel(ui, &mut self.ui_state) {
                    self.dispatch_ask(prompt, ctx);
                }
            }
        });
    }
}

impl StudioApp {
    /// Run one chat exchange (async). The user turn is appended before the
    /// first await so the echo shows immediately; on failure it is marked
    /// and no assistant turn is appended.
    fn dispatch_chat(&mut self, text: String, ctx: &egui::Context) {
        let session = self.chat_session();
        let provider = self.provider.clone();
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();

        bus.emit(StudioEvent::RequestStart { panel: Panel::ChatBot });

        wasm_bindgen_futures::spawn_local(async move {
            let prior = session.borrow_mut().begin_exchange(&text);
            match provider.send(&prior, &text).await {
                Ok(reply) => {
                    let shown = reply.text.clone();
                    session.borrow_mut().complete_exchange(reply);
                    bus.emit(StudioEvent::ChatReply { text: shown });
                }
                Err(e) => {
                    log::error!("chat exchange failed: {}", e);
                    session.borrow_mut().fail_exchange();
                    bus.emit(StudioEvent::ChatFailed {
                        message: e.to_string(),
                    });
                }
            }
            ctx.request_repaint();
        });
    }

    /// Open the browser file picker (async)
    fn dispatch_pick_image(&self, ctx: &egui::Context) {
        let slot = self.picked_slot.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let file = rfd::AsyncFileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg"])
                .pick_file()
                .await;
            if let Some(file) = file {
                let bytes = file.read().await;
                *slot.borrow_mut() = Some((file.file_name(), bytes));
            }
            ctx.request_repaint();
        });
    }

    /// Decode the staged upload, show the 800×500 preview, and request a
    /// caption for the ORIGINAL image. With nothing staged or undecodable
    /// bytes, no vision call is made — the failure is shown inline.
    fn dispatch_caption(&mut self, ctx: &egui::Context) {
        let staged = match &self.ui_state.caption.picked {
            Some(picked) => picked.bytes.clone(),
            None => {
                self.event_bus.emit(StudioEvent::RequestFailed {
                    panel: Panel::ImageCaptioning,
                    message: "no image uploaded — choose a JPEG or PNG first".to_string(),
                });
                return;
            }
        };

        let decoded = match picture::decode(&staged) {
            Ok(p) => p,
            Err(e) => {
                self.event_bus.emit(StudioEvent::RequestFailed {
                    panel: Panel::ImageCaptioning,
                    message: e.to_string(),
                });
                return;
            }
        };

        let preview = decoded.preview();
        self.ui_state.caption.preview = Some(ColorImage::from_rgba_unmultiplied(
            [preview.width, preview.height],
            &preview.rgba,
        ));
        self.ui_state.caption.texture = None;
        self.ui_state.caption.caption = None;
        self.ui_state.caption.error = None;

        let payload = decoded.payload().clone();
        let provider = self.provider.clone();
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();

        bus.emit(StudioEvent::RequestStart {
            panel: Panel::ImageCaptioning,
        });

        wasm_bindgen_futures::spawn_local(async move {
            match provider.caption(CAPTION_INSTRUCTION, &payload).await {
                Ok(text) => bus.emit(StudioEvent::CaptionReady { text }),
                Err(e) => bus.emit(StudioEvent::RequestFailed {
                    panel: Panel::ImageCaptioning,
                    message: e.to_string(),
                }),
            }
            ctx.request_repaint();
        });
    }

    /// Embed arbitrary text — empty input goes through verbatim
    fn dispatch_embed(&mut self, text: String, ctx: &egui::Context) {
        let provider = self.provider.clone();
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();

        bus.emit(StudioEvent::RequestStart { panel: Panel::EmbedText });

        wasm_bindgen_futures::spawn_local(async move {
            match provider.embed(&text).await {
                Ok(values) => bus.emit(StudioEvent::EmbeddingReady { values }),
                Err(e) => bus.emit(StudioEvent::RequestFailed {
                    panel: Panel::EmbedText,
                    message: e.to_string(),
                }),
            }
            ctx.request_repaint();
        });
    }

    /// Single-turn Q&A — stateless, no history
    fn dispatch_ask(&mut self, prompt: String, ctx: &egui::Context) {
        if prompt.trim().is_empty() {
            self.event_bus.emit(StudioEvent::RequestFailed {
                panel: Panel::AskAnything,
                message: "enter a prompt first".to_string(),
            });
            return;
        }

        let provider = self.provider.clone();
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();

        bus.emit(StudioEvent::RequestStart { panel: Panel::AskAnything });

        wasm_bindgen_futures::spawn_local(async move {
            match provider.generate(&prompt).await {
                Ok(text) => bus.emit(StudioEvent::AnswerReady { text }),
                Err(e) => bus.emit(StudioEvent::RequestFailed {
                    panel: Panel::AskAnything,
                    message: e.to_string(),
                }),
            }
            ctx.request_repaint();
        });
    }
}
