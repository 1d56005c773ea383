//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(22, 24, 28);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(35, 38, 44);
pub const BG_SURFACE: Color32 = Color32::from_rgb(48, 52, 59);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(226, 228, 233);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(155, 160, 170);
pub const ACCENT: Color32 = Color32::from_rgb(66, 133, 244);
pub const SUCCESS: Color32 = Color32::from_rgb(52, 168, 83);
pub const ERROR: Color32 = Color32::from_rgb(234, 67, 53);
pub const WARNING: Color32 = Color32::from_rgb(251, 188, 5);
/// Background for the caption result box
pub const INFO_BG: Color32 = Color32::from_rgb(28, 42, 58);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(6);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);

/// Apply the dark theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BG_SURFACE;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
