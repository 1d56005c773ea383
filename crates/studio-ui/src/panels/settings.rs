//! Settings panel — service provider config, model ids, API key input.

use egui::{self, RichText};
use studio_types::config::{ModelProvider, StudioConfig};
use crate::theme::*;

/// Render the settings panel. Returns true if any field changed, so the
/// caller can rebuild the provider.
pub fn settings_panel(ui: &mut egui::Ui, config: &mut StudioConfig) -> bool {
    let mut changed = false;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Settings").color(TEXT_PRIMARY));
            ui.separator();

            ui.label(RichText::new("Service").color(ACCENT).strong());
            ui.add_space(2.0);

            // Provider
            ui.label(RichText::new("Provider").color(TEXT_SECONDARY).small());
            egui::ComboBox::from_id_salt("model_provider")
                .selected_text(config.model.provider.label())
                .show_ui(ui, |ui| {
                    for p in ModelProvider::all() {
                        if ui
                            .selectable_value(&mut config.model.provider, p.clone(), p.label())
                            .changed()
                        {
                            changed = true;
                        }
                    }
                });

            ui.add_space(4.0);

            // Model ids, one per capability
            ui.label(RichText::new("Chat model").color(TEXT_SECONDARY).small());
            if ui.text_edit_singleline(&mut config.model.chat_model).changed() {
                changed = true;
            }

            ui.label(RichText::new("Vision model").color(TEXT_SECONDARY).small());
            if ui
                .text_edit_singleline(&mut config.model.vision_model)
                .changed()
            {
                changed = true;
            }

            ui.label(RichText::new("Embedding model").color(TEXT_SECONDARY).small());
            if ui
                .text_edit_singleline(&mut config.model.embedding_model)
                .changed()
            {
                changed = true;
            }

            ui.add_space(4.0);

            // API Key (masked)
            ui.label(RichText::new("API Key").color(TEXT_SECONDARY).small());
            let api_key_edit = egui::TextEdit::singleline(&mut config.model.api_key)
                .password(true)
                .hint_text("AIza...");
            if ui.add(api_key_edit).changed() {
                changed = true;
            }

            ui.add_space(4.0);

            // Custom base URL
            ui.label(
                RichText::new("API Base URL (optional)")
                    .color(TEXT_SECONDARY)
                    .small(),
            );
            let mut base_url = config.model.api_base.clone().unwrap_or_default();
            if ui
                .add(
                    egui::TextEdit::singleline(&mut base_url)
                        .hint_text(config.model.provider.default_base_url()),
                )
                .changed()
            {
                config.model.api_base = if base_url.is_empty() {
                    None
                } else {
                    Some(base_url)
                };
                changed = true;
            }

            ui.add_space(4.0);

            // Temperature
            ui.label(RichText::new("Temperature").color(TEXT_SECONDARY).small());
            if ui
                .add(egui::Slider::new(&mut config.model.temperature, 0.0..=2.0))
                .changed()
            {
                changed = true;
            }

            // Max output tokens
            ui.label(RichText::new("Max Output Tokens").color(TEXT_SECONDARY).small());
            if ui
                .add(egui::Slider::new(
                    &mut config.model.max_output_tokens,
                    256..=8192,
                ))
                .changed()
            {
                changed = true;
            }
        });

    changed
}
