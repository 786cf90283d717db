//! Chat panel — displays the conversation transcript and input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Stroke, Vec2};

use crate::state::UiState;
use crate::theme::*;

/// Render the chat panel. Returns Some(message) when the user submits input.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_PAGE)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.label(RichText::new("\u{1F916}").size(22.0));
                    ui.heading(
                        RichText::new("Gym Coach Chat")
                            .color(TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let status_color = if state.is_busy() { WARNING } else { SUCCESS };
                        ui.label(
                            RichText::new(&state.status_text)
                                .color(status_color)
                                .small(),
                        );
                        if state.is_busy() {
                            ui.add(egui::Spinner::new().color(ACCENT));
                        }
                    });
                });

                ui.separator();

                // Transcript area
                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for entry in &state.transcript {
                            render_entry(ui, entry);
                            ui.add_space(4.0);
                        }
                    });

                ui.add_space(8.0);

                // Input area
                ui.horizontal(|ui| {
                    let is_busy = state.is_busy();
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Type your answer...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add_enabled(!is_busy, input);

                    let send_enabled = !state.input_text.trim().is_empty() && !is_busy;
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(BG_CARD))
                            .fill(if send_enabled { ACCENT } else { CARD_BORDER })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    if (response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        && send_enabled)
                        || send_btn.clicked()
                    {
                        let text = state.input_text.trim().to_string();
                        state.push_user_message(&text);
                        submitted = Some(text);
                        state.input_text.clear();
                        response.request_focus();
                    }
                });
            });
        });

    submitted
}

fn render_entry(ui: &mut egui::Ui, entry: &crate::state::ChatEntry) {
    let (label, label_color, bg) = match entry.role.as_str() {
        "user" => ("You", ACCENT, BG_USER_CARD),
        "assistant" => ("Coach", SUCCESS, BG_CARD),
        "error" => ("Error", ERROR, ERROR_BG),
        _ => ("???", TEXT_SECONDARY, BG_CARD),
    };

    egui::Frame::default()
        .fill(bg)
        .stroke(Stroke::new(1.0, CARD_BORDER))
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(label_color).strong().small());
            ui.label(RichText::new(&entry.text).color(TEXT_PRIMARY));
        });
}
