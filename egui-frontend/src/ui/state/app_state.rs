//! # Core Application State
//!
//! This module contains the essential application state for the investment
//! tracker dashboard: the loaded portfolio summary, the allocation chart fed
//! from it, and the dashboard rendering methods.

use eframe::egui;
use shared::{format_inr, PortfolioSummary};

use crate::portfolio;
use crate::ui::components::allocation_chart::AllocationPieChart;
use crate::ui::components::styling::draw_card_container;
use crate::ui::components::theme::{colors, CURRENT_THEME};

/// Core application state containing the displayed portfolio data
pub struct AppState {
    /// Portfolio summary currently displayed
    pub summary: PortfolioSummary,

    /// Allocation pie chart fed from the summary
    pub allocation_chart: AllocationPieChart,

    /// Set when the summary came from the bundled sample instead of disk
    pub data_source_note: Option<String>,
}

impl AppState {
    /// Load state from disk, falling back to the bundled sample summary
    pub fn new() -> Self {
        match portfolio::load_portfolio_summary() {
            Ok(summary) => Self::from_summary(summary, None),
            Err(error) => {
                log::warn!("⚠️ Falling back to sample portfolio data: {}", error);
                Self::from_summary(
                    portfolio::sample_summary(),
                    Some("Showing sample data - no portfolio document found".to_string()),
                )
            }
        }
    }

    /// Build state around an already loaded summary
    pub fn from_summary(summary: PortfolioSummary, data_source_note: Option<String>) -> Self {
        let mut allocation_chart = AllocationPieChart::new();
        allocation_chart.update_allocation(&summary.asset_allocation);

        Self {
            summary,
            allocation_chart,
            data_source_note,
        }
    }

    /// Draw the dashboard: headline totals plus the allocation card.
    ///
    /// Runs inside the error boundary; a reported failure surfaces as `Err`.
    pub fn draw_dashboard(&self, ui: &mut egui::Ui) -> anyhow::Result<()> {
        self.draw_headline(ui);
        self.draw_allocation_section(ui);
        Ok(())
    }

    /// Title row plus the invested / current / returns summary line
    fn draw_headline(&self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("Unified Investment Tracker")
                .font(egui::FontId::new(26.0, egui::FontFamily::Proportional))
                .color(colors::TEXT_HEADING)
                .strong(),
        );

        if let Some(note) = &self.data_source_note {
            ui.label(
                egui::RichText::new(note)
                    .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_SECONDARY),
            );
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "Invested: {}",
                    format_inr(self.summary.total_invested)
                ))
                .color(colors::TEXT_PRIMARY),
            );
            ui.separator();
            ui.label(
                egui::RichText::new(format!(
                    "Current Value: {}",
                    format_inr(self.summary.total_current_value)
                ))
                .color(colors::TEXT_PRIMARY),
            );
            ui.separator();

            let returns_color = if self.summary.total_returns < 0.0 {
                CURRENT_THEME.typography.negative
            } else {
                CURRENT_THEME.typography.positive
            };
            ui.label(
                egui::RichText::new(format!(
                    "Returns: {} ({:.2}%)",
                    format_inr(self.summary.total_returns),
                    self.summary.returns_percentage
                ))
                .color(returns_color),
            );
        });
    }

    /// Allocation card with the pie chart inside
    fn draw_allocation_section(&self, ui: &mut egui::Ui) {
        let content_margin = 20.0;
        let available = ui.available_rect_before_wrap();
        let card_rect = egui::Rect::from_min_size(
            available.min + egui::vec2(content_margin, content_margin),
            egui::vec2(
                (available.width() - content_margin * 2.0).max(0.0),
                (available.height() - content_margin * 2.0).max(0.0),
            ),
        );

        draw_card_container(ui, card_rect, 10.0);

        let inner_rect = card_rect.shrink(16.0);
        ui.allocate_ui_at_rect(inner_rect, |ui| {
            ui.label(
                egui::RichText::new("Asset Allocation")
                    .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_HEADING)
                    .strong(),
            );
            ui.add_space(4.0);
            self.allocation_chart.render(ui);
        });
    }
}
