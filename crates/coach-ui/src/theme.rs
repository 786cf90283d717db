//! UI theme constants — the sober light palette of the original page.

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PAGE: Color32 = Color32::from_rgb(244, 244, 244);
pub const BG_CARD: Color32 = Color32::from_rgb(255, 255, 255);
pub const BG_USER_CARD: Color32 = Color32::from_rgb(234, 238, 244);
pub const CARD_BORDER: Color32 = Color32::from_rgb(204, 204, 204);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(51, 51, 51);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(119, 119, 119);
pub const ACCENT: Color32 = Color32::from_rgb(54, 88, 128);
pub const SUCCESS: Color32 = Color32::from_rgb(46, 125, 50);
pub const ERROR: Color32 = Color32::from_rgb(183, 28, 28);
pub const ERROR_BG: Color32 = Color32::from_rgb(251, 233, 231);
pub const WARNING: Color32 = Color32::from_rgb(181, 129, 4);

// Square corners, as in the source styling
pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(0);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);

/// Apply the light theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = false;
    style.visuals.panel_fill = BG_PAGE;
    style.visuals.window_fill = BG_CARD;
    style.visuals.extreme_bg_color = BG_CARD;
    style.visuals.override_text_color = Some(TEXT_PRIMARY);

    style.visuals.widgets.inactive.bg_fill = BG_CARD;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BG_CARD;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, BG_CARD);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.3);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
