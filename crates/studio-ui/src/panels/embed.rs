//! Text embedding panel — arbitrary text in, raw representation out.

use egui::{self, RichText, ScrollArea, Vec2};
use studio_types::panel::Panel;
use crate::state::UiState;
use crate::theme::*;

/// Render the embedding panel. Returns Some(text) when the user asks for
/// embeddings — empty input included, it goes through verbatim.
pub fn embed_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.heading(
                RichText::new(Panel::EmbedText.title())
                    .color(TEXT_PRIMARY)
                    .strong(),
            );
            ui.separator();

            ui.add(
                egui::TextEdit::multiline(&mut state.embed.input)
                    .hint_text("Enter the text to get embeddings")
                    .desired_rows(4)
                    .desired_width(ui.available_width()),
            );

            ui.add_space(6.0);

            let btn = ui.add_enabled(
                !state.embed.waiting,
                egui::Button::new(RichText::new("Get Embeddings").color(TEXT_PRIMARY))
                    .fill(ACCENT)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(130.0, 28.0)),
            );
            if btn.clicked() {
                submitted = Some(state.embed.input.clone());
            }

            if let Some(err) = &state.embed.error {
                ui.add_space(4.0);
                ui.label(RichText::new(err).color(ERROR));
            }

            if state.embed.waiting {
                ui.label(RichText::new("Embedding...").color(TEXT_SECONDARY).italics());
            }

            // The representation is rendered as-is, no reformatting
            if let Some(values) = &state.embed.values {
                ui.add_space(8.0);
                ScrollArea::vertical().auto_shrink([false, true]).show(ui, |ui| {
                    ui.label(
                        RichText::new(format!("{:?}", values))
                            .color(TEXT_PRIMARY)
                            .monospace(),
                    );
                });
            }
        });

    submitted
}
