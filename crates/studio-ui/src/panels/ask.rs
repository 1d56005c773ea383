//! Free-form Q&A panel — single-turn, no history.

use egui::{self, RichText, ScrollArea, Vec2};
use studio_types::panel::Panel;
use crate::state::UiState;
use crate::theme::*;

/// Render the Q&A panel. Returns Some(prompt) when the user asks.
pub fn ask_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.heading(
                RichText::new(Panel::AskAnything.title())
                    .color(TEXT_PRIMARY)
                    .strong(),
            );
            ui.separator();

            ui.add(
                egui::TextEdit::multiline(&mut state.ask.input)
                    .hint_text("Ask me anything...")
                    .desired_rows(4)
                    .desired_width(ui.available_width()),
            );

            ui.add_space(6.0);

            let btn = ui.add_enabled(
                !state.ask.waiting,
                egui::Button::new(RichText::new("Get Response").color(TEXT_PRIMARY))
                    .fill(ACCENT)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(120.0, 28.0)),
            );
            if btn.clicked() {
                submitted = Some(state.ask.input.clone());
            }

            if let Some(err) = &state.ask.error {
                ui.add_space(4.0);
                ui.label(RichText::new(err).color(ERROR));
            }

            if state.ask.waiting {
                ui.label(RichText::new("Thinking...").color(TEXT_SECONDARY).italics());
            }

            if let Some(answer) = &state.ask.answer {
                ui.add_space(8.0);
                ScrollArea::vertical().auto_shrink([false, true]).show(ui, |ui| {
                    egui::Frame::default()
                        .fill(BG_SECONDARY)
                        .corner_radius(PANEL_ROUNDING)
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(answer).color(TEXT_PRIMARY));
                        });
                });
            }
        });

    submitted
}
