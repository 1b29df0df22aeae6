//! # Allocation Chart Renderer
//!
//! This module paints the asset allocation pie using egui's painting
//! primitives: one filled slice per asset class, positional palette colors,
//! slice labels, a hover tooltip with the slice value formatted as currency,
//! and a legend listing every asset class.

use eframe::egui;
use shared::AllocationEntry;
use std::collections::BTreeMap;
use std::f32::consts::{PI, TAU};

use super::data_preparation::{prepare_allocation_slices, AllocationSlice};
use crate::ui::components::theme::{colors, CURRENT_THEME};

/// Currency formatting function supplied by the host app
pub type CurrencyFormatter = fn(f64) -> String;

/// Configuration for allocation chart appearance
#[derive(Debug, Clone)]
pub struct AllocationChartConfig {
    /// Outer radius of the pie
    pub radius: f32,
    /// Slice labels sit at radius times this factor
    pub label_radius_factor: f32,
    /// Font size for slice labels
    pub label_font_size: f32,
    /// Side length of a legend color swatch
    pub legend_swatch_size: f32,
    /// Formats slice values for the hover tooltip
    pub currency_formatter: CurrencyFormatter,
}

impl Default for AllocationChartConfig {
    fn default() -> Self {
        Self {
            radius: 110.0,
            label_radius_factor: 1.3,
            label_font_size: 12.0,
            legend_swatch_size: 12.0,
            currency_formatter: shared::format_inr,
        }
    }
}

/// Allocation pie chart component
#[derive(Debug)]
pub struct AllocationPieChart {
    /// Configuration for appearance
    config: AllocationChartConfig,
    /// Cached slice sequence, in map iteration order
    slices: Vec<AllocationSlice>,
}

impl AllocationPieChart {
    /// Create a new allocation chart component
    pub fn new() -> Self {
        Self {
            config: AllocationChartConfig::default(),
            slices: Vec::new(),
        }
    }

    /// Create with custom configuration
    pub fn with_config(config: AllocationChartConfig) -> Self {
        Self {
            config,
            slices: Vec::new(),
        }
    }

    /// Recompute the cached slice sequence from a fresh allocation map
    pub fn update_allocation(&mut self, allocation: &BTreeMap<String, AllocationEntry>) {
        self.slices = prepare_allocation_slices(allocation);
        log::info!("📊 Allocation chart updated: {} slices", self.slices.len());
    }

    /// Slices currently backing the chart
    pub fn slices(&self) -> &[AllocationSlice] {
        &self.slices
    }

    /// Render the pie, slice labels, hover tooltip and legend
    pub fn render(&self, ui: &mut egui::Ui) {
        // Room for the pie plus labels that sit outside the rim
        let chart_extent = self.config.radius * self.config.label_radius_factor * 2.0 + 24.0;
        let desired_size = egui::vec2(ui.available_width().max(chart_extent), chart_extent);
        let (rect, mut response) = ui.allocate_exact_size(desired_size, egui::Sense::hover());
        let center = rect.center();

        if ui.is_rect_visible(rect) {
            self.paint_slices(ui, center);
            self.paint_labels(ui, center);
        }

        if let Some(pointer) = response.hover_pos() {
            if let Some(index) = slice_index_at(&self.slices, center, self.config.radius, pointer) {
                let slice = &self.slices[index];
                let tooltip =
                    format!("{}: {}", slice.name, (self.config.currency_formatter)(slice.value));
                response = response.on_hover_text(tooltip);
            }
        }
        let _ = response;

        self.render_legend(ui);
    }

    /// Paint the filled pie slices
    fn paint_slices(&self, ui: &egui::Ui, center: egui::Pos2) {
        let painter = ui.painter();
        let mut start_angle = -PI / 2.0; // Start at 12 o'clock, sweep clockwise

        for (i, slice) in self.slices.iter().enumerate() {
            let sweep = slice_sweep(slice);
            if sweep > 0.0 {
                self.fill_slice(
                    painter,
                    center,
                    start_angle,
                    sweep,
                    CURRENT_THEME.chart_slice_color(i),
                );
            }
            start_angle += sweep;
        }
    }

    /// Fill one slice as a triangle fan around the pie center
    fn fill_slice(
        &self,
        painter: &egui::Painter,
        center: egui::Pos2,
        start_angle: f32,
        sweep: f32,
        color: egui::Color32,
    ) {
        // Segment count follows the arc length so curves stay smooth
        let num_segments = ((sweep * self.config.radius / 3.0).ceil() as i32).clamp(2, 100);
        let angle_step = sweep / num_segments as f32;

        let mut mesh = egui::epaint::Mesh::default();
        mesh.colored_vertex(center, color);
        for i in 0..=num_segments {
            let angle = start_angle + angle_step * i as f32;
            mesh.colored_vertex(arc_point(center, self.config.radius, angle), color);
        }
        for i in 0..num_segments as u32 {
            mesh.add_triangle(0, i + 1, i + 2);
        }
        painter.add(egui::Shape::mesh(mesh));

        // Hairline separator between adjacent slices
        let outline = egui::Stroke::new(1.5, CURRENT_THEME.chart.slice_outline);
        painter.line_segment(
            [center, arc_point(center, self.config.radius, start_angle)],
            outline,
        );
        painter.line_segment(
            [center, arc_point(center, self.config.radius, start_angle + sweep)],
            outline,
        );
    }

    /// Draw each slice's label at its mid-angle, outside the rim
    fn paint_labels(&self, ui: &egui::Ui, center: egui::Pos2) {
        let painter = ui.painter();
        let label_radius = self.config.radius * self.config.label_radius_factor;
        let font = egui::FontId::new(self.config.label_font_size, egui::FontFamily::Proportional);
        let mut start_angle = -PI / 2.0;

        for slice in &self.slices {
            let sweep = slice_sweep(slice);
            if sweep > 0.0 {
                let mid_angle = start_angle + sweep / 2.0;
                painter.text(
                    arc_point(center, label_radius, mid_angle),
                    egui::Align2::CENTER_CENTER,
                    slice.label(),
                    font.clone(),
                    colors::TEXT_PRIMARY,
                );
            }
            start_angle += sweep;
        }
    }

    /// Legend row: one color swatch and name per asset class
    fn render_legend(&self, ui: &mut egui::Ui) {
        if self.slices.is_empty() {
            return;
        }

        ui.horizontal_wrapped(|ui| {
            for (i, slice) in self.slices.iter().enumerate() {
                let swatch_size = egui::vec2(
                    self.config.legend_swatch_size,
                    self.config.legend_swatch_size,
                );
                let (swatch_rect, _) = ui.allocate_exact_size(swatch_size, egui::Sense::hover());
                ui.painter().rect_filled(
                    swatch_rect,
                    egui::Rounding::same(2.0),
                    CURRENT_THEME.chart_slice_color(i),
                );

                ui.label(
                    egui::RichText::new(&slice.name)
                        .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                        .color(colors::TEXT_SECONDARY),
                );
                ui.add_space(10.0);
            }
        });
    }
}

impl Default for AllocationPieChart {
    fn default() -> Self {
        Self::new()
    }
}

/// Painted angular width of a slice; negative fractions paint nothing
fn slice_sweep(slice: &AllocationSlice) -> f32 {
    (slice.fraction.max(0.0) as f32) * TAU
}

/// Point on the circle around `center` at the given painter angle
fn arc_point(center: egui::Pos2, radius: f32, angle: f32) -> egui::Pos2 {
    egui::pos2(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Index of the slice under the pointer, if it is inside the pie.
///
/// The pointer angle is measured from 12 o'clock going clockwise, matching
/// the order in which slices are painted.
fn slice_index_at(
    slices: &[AllocationSlice],
    center: egui::Pos2,
    radius: f32,
    pointer: egui::Pos2,
) -> Option<usize> {
    let offset = pointer - center;
    if offset.length() > radius {
        return None;
    }

    let mut angle = offset.y.atan2(offset.x) + PI / 2.0;
    if angle < 0.0 {
        angle += TAU;
    }

    let mut start = 0.0f32;
    for (i, slice) in slices.iter().enumerate() {
        let sweep = slice_sweep(slice);
        if angle < start + sweep {
            return Some(i);
        }
        start += sweep;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::AllocationEntry;

    fn half_half_slices() -> Vec<AllocationSlice> {
        let mut allocation = BTreeMap::new();
        allocation.insert(
            "MF".to_string(),
            AllocationEntry {
                invested: 0.0,
                current_value: 50.0,
                percentage: 50.0,
            },
        );
        allocation.insert(
            "STOCK".to_string(),
            AllocationEntry {
                invested: 0.0,
                current_value: 50.0,
                percentage: 50.0,
            },
        );
        prepare_allocation_slices(&allocation)
    }

    #[test]
    fn test_hit_testing_finds_the_right_slice() {
        let slices = half_half_slices();
        let center = egui::pos2(100.0, 100.0);
        let radius = 50.0;

        // First slice covers the right half (12 o'clock going clockwise)
        let right = egui::pos2(130.0, 100.0);
        assert_eq!(slice_index_at(&slices, center, radius, right), Some(0));

        // Second slice covers the left half
        let left = egui::pos2(70.0, 100.0);
        assert_eq!(slice_index_at(&slices, center, radius, left), Some(1));
    }

    #[test]
    fn test_hit_testing_outside_the_pie_misses() {
        let slices = half_half_slices();
        let center = egui::pos2(100.0, 100.0);

        let outside = egui::pos2(100.0, 20.0);
        assert_eq!(slice_index_at(&slices, center, 50.0, outside), None);
    }

    #[test]
    fn test_hit_testing_with_no_slices_misses() {
        let center = egui::pos2(0.0, 0.0);
        assert_eq!(slice_index_at(&[], center, 50.0, center), None);
    }

    #[test]
    fn test_zero_width_slices_never_capture_the_pointer() {
        let mut allocation = BTreeMap::new();
        allocation.insert(
            "FD".to_string(),
            AllocationEntry {
                invested: 0.0,
                current_value: 0.0,
                percentage: 0.0,
            },
        );
        allocation.insert(
            "MF".to_string(),
            AllocationEntry {
                invested: 0.0,
                current_value: 100.0,
                percentage: 100.0,
            },
        );
        let slices = prepare_allocation_slices(&allocation);
        let center = egui::pos2(0.0, 0.0);

        // Everything inside the pie belongs to the non-empty slice
        assert_eq!(
            slice_index_at(&slices, center, 50.0, egui::pos2(20.0, 0.0)),
            Some(1)
        );
        assert_eq!(
            slice_index_at(&slices, center, 50.0, egui::pos2(-20.0, 10.0)),
            Some(1)
        );
    }

    #[test]
    fn test_update_allocation_tracks_entry_count() {
        let mut chart = AllocationPieChart::new();
        assert!(chart.slices().is_empty());

        let mut allocation = BTreeMap::new();
        for (i, code) in ["MF", "STOCK", "CRYPTO", "FD", "PPF", "EPF", "UNLISTED"]
            .iter()
            .enumerate()
        {
            allocation.insert(
                code.to_string(),
                AllocationEntry {
                    invested: 100.0,
                    current_value: 100.0 + i as f64,
                    percentage: 100.0 / 7.0,
                },
            );
        }
        chart.update_allocation(&allocation);
        assert_eq!(chart.slices().len(), 7);

        chart.update_allocation(&BTreeMap::new());
        assert!(chart.slices().is_empty());
    }

    #[test]
    fn test_render_smoke_headless() {
        let mut allocation = BTreeMap::new();
        allocation.insert(
            "MF".to_string(),
            AllocationEntry {
                invested: 60000.0,
                current_value: 70000.0,
                percentage: 58.3,
            },
        );
        allocation.insert(
            "STOCK".to_string(),
            AllocationEntry {
                invested: 40000.0,
                current_value: 50000.0,
                percentage: 41.7,
            },
        );

        let mut chart = AllocationPieChart::new();
        chart.update_allocation(&allocation);

        // Drawing a frame headlessly must not panic
        let ctx = egui::Context::default();
        let _ = ctx.run(Default::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                chart.render(ui);
            });
        });
    }

    #[test]
    fn test_render_smoke_with_empty_allocation() {
        let chart = AllocationPieChart::new();

        // Zero slices must render without faulting
        let ctx = egui::Context::default();
        let _ = ctx.run(Default::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                chart.render(ui);
            });
        });
    }
}
