//! Image captioning panel — upload, preview, and caption an image.

use egui::{self, RichText, TextureOptions, Vec2};
use studio_types::panel::Panel;
use crate::state::UiState;
use crate::theme::*;

/// What the user asked the panel to do this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionAction {
    /// Open the file picker
    PickImage,
    /// Decode the staged upload and request a caption
    GenerateCaption,
}

/// Render the captioning panel. Returns Some(action) on a user trigger.
pub fn caption_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<CaptionAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.heading(
                RichText::new(Panel::ImageCaptioning.title())
                    .color(TEXT_PRIMARY)
                    .strong(),
            );
            ui.separator();

            ui.horizontal(|ui| {
                if ui
                    .add(
                        egui::Button::new(RichText::new("Upload an Image").color(TEXT_PRIMARY))
                            .fill(BG_SURFACE)
                            .corner_radius(PANEL_ROUNDING),
                    )
                    .clicked()
                {
                    action = Some(CaptionAction::PickImage);
                }

                match &state.caption.picked {
                    Some(picked) => {
                        ui.label(RichText::new(&picked.name).color(TEXT_SECONDARY).small());
                    }
                    None => {
                        ui.label(
                            RichText::new("jpg / jpeg / png — or drop a file here")
                                .color(TEXT_SECONDARY)
                                .small()
                                .italics(),
                        );
                    }
                }
            });

            ui.add_space(6.0);

            let generate_btn = ui.add_enabled(
                !state.caption.waiting,
                egui::Button::new(RichText::new("Generate Caption").color(TEXT_PRIMARY))
                    .fill(ACCENT)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(140.0, 28.0)),
            );
            if generate_btn.clicked() {
                action = Some(CaptionAction::GenerateCaption);
            }

            if let Some(err) = &state.caption.error {
                ui.add_space(4.0);
                ui.label(RichText::new(err).color(ERROR));
            }

            ui.add_space(8.0);

            // Preview on the left, caption on the right
            ui.columns(2, |columns| {
                if state.caption.texture.is_none() {
                    if let Some(preview) = state.caption.preview.take() {
                        state.caption.texture = Some(columns[0].ctx().load_texture(
                            "caption_preview",
                            preview,
                            TextureOptions::LINEAR,
                        ));
                    }
                }

                if let Some(texture) = &state.caption.texture {
                    let width = columns[0].available_width();
                    columns[0].add(egui::Image::new(texture).max_width(width));
                }

                if state.caption.waiting {
                    columns[1].label(
                        RichText::new("Captioning...").color(TEXT_SECONDARY).italics(),
                    );
                } else if let Some(caption) = &state.caption.caption {
                    egui::Frame::default()
                        .fill(INFO_BG)
                        .corner_radius(PANEL_ROUNDING)
                        .inner_margin(10.0)
                        .show(&mut columns[1], |ui| {
                            ui.label(RichText::new(caption).color(TEXT_PRIMARY));
                        });
                }
            });
        });

    action
}
