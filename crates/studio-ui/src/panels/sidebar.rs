//! Sidebar menu — routes the user to exactly one of the four panels.

use egui::{self, RichText};
use studio_types::panel::Panel;
use crate::state::UiState;
use crate::theme::*;

/// Render the sidebar menu. Returns Some(panel) when the selection changes.
pub fn sidebar(ui: &mut egui::Ui, state: &UiState) -> Option<Panel> {
    let mut selected = None;

    ui.add_space(8.0);
    ui.heading(RichText::new("Gemini Studio").color(ACCENT).strong());
    ui.add_space(4.0);
    ui.separator();
    ui.add_space(4.0);

    for panel in Panel::all() {
        let active = state.active_panel == *panel;
        let label = RichText::new(format!("{}  {}", panel.icon(), panel.label())).color(
            if active { TEXT_PRIMARY } else { TEXT_SECONDARY },
        );
        if ui.selectable_label(active, label).clicked() && !active {
            selected = Some(*panel);
        }
    }

    selected
}
