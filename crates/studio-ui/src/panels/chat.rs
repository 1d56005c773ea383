//! Chat panel — replays the conversation history and takes new input.

use egui::{self, Align, Color32, Layout, RichText, ScrollArea, Vec2};
use crate::state::{ChatEntry, UiState};
use crate::theme::*;

/// Render the chat panel. Returns Some(message) when user submits input.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new(studio_types::panel::Panel::ChatBot.title())
                            .color(TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let status_color = if state.chat.waiting { WARNING } else { SUCCESS };
                        ui.label(
                            RichText::new(&state.status_text)
                                .color(status_color)
                                .small(),
                        );
                    });
                });

                ui.separator();

                // History replay — every redraw shows the full history in
                // order; nothing here talks to the service.
                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for entry in &state.chat.entries {
                            render_entry(ui, entry);
                            ui.add_space(4.0);
                        }

                        if state.chat.waiting {
                            ui.label(RichText::new("▌").color(ACCENT).strong());
                        }
                    });

                ui.add_space(8.0);

                // Input area
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.chat.input)
                        .hint_text("Ask me anything...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    let send_enabled =
                        !state.chat.input.trim().is_empty() && !state.chat.waiting;
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    if (response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        && send_enabled)
                        || send_btn.clicked()
                    {
                        let text = state.chat.input.trim().to_string();
                        state.push_user_entry(&text);
                        submitted = Some(text);
                        state.chat.input.clear();
                        response.request_focus();
                    }
                });
            });
        });

    submitted
}

fn render_entry(ui: &mut egui::Ui, entry: &ChatEntry) {
    let error_bg = Color32::from_rgb(50, 20, 20);
    let (label, label_color, bg) = match entry.role.as_str() {
        "user" => ("You", ACCENT, BG_SECONDARY),
        "assistant" => ("Gemini", SUCCESS, BG_SECONDARY),
        "error" => ("Error", ERROR, error_bg),
        _ => ("???", TEXT_SECONDARY, BG_SECONDARY),
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(label).color(label_color).strong().small());
                if entry.failed {
                    ui.label(
                        RichText::new("⚠ no reply received")
                            .color(WARNING)
                            .small(),
                    );
                }
            });
            ui.label(RichText::new(&entry.text).color(TEXT_PRIMARY));
        });
}
