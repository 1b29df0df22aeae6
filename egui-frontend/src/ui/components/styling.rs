//! # Styling Module
//!
//! This module contains the styling functions shared across the investment
//! tracker UI.
//!
//! ## Key Functions:
//! - `setup_app_style()` - Configure global egui styling
//! - `draw_card_container()` - Draw card-style containers with shadows
//!
//! ## Purpose:
//! This module ensures visual consistency and provides a centralized place
//! for all styling concerns.

use eframe::egui;

use super::theme::colors;

/// Setup the global UI styling for the entire application
pub fn setup_app_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.window_fill = super::theme::CURRENT_THEME.layout.window_background;
        style.visuals.panel_fill = super::theme::CURRENT_THEME.layout.window_background;
        style.visuals.button_frame = true;
        style.visuals.override_text_color = Some(colors::TEXT_PRIMARY);

        // Larger text for dashboard readability
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(26.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );

        // Rounded corners and padding
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);

        style
    });
}

/// Draw a card-style container with a subtle drop shadow
pub fn draw_card_container(ui: &mut egui::Ui, rect: egui::Rect, rounding: f32) {
    let painter = ui.painter();

    // Draw subtle shadow first (offset slightly)
    let shadow_rect = egui::Rect::from_min_size(rect.min + egui::vec2(2.0, 2.0), rect.size());
    painter.rect_filled(shadow_rect, egui::Rounding::same(rounding), colors::CARD_SHADOW);

    // Card background with a hairline border
    painter.rect_filled(rect, egui::Rounding::same(rounding), colors::CARD_BACKGROUND);
    painter.rect_stroke(
        rect,
        egui::Rounding::same(rounding),
        egui::Stroke::new(1.0, colors::CARD_BORDER),
    );
}
