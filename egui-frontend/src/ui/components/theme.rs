//! # Theme Configuration
//!
//! This module provides centralized color and style configuration for the
//! investment tracker app. All visual styling should use these constants to
//! ensure consistency and easy theme management.
//!
//! ## Usage
//! ```rust
//! use crate::ui::components::theme::CURRENT_THEME;
//!
//! let color = CURRENT_THEME.chart_slice_color(2);
//! ```

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background and layout colors
    pub layout: LayoutColors,
    /// Text and typography colors
    pub typography: TypographyColors,
    /// Allocation chart colors
    pub chart: ChartColors,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    /// Window background color
    pub window_background: Color32,
    /// Card and container colors
    pub card_background: Color32,
    pub card_shadow: Color32,
    pub card_border: Color32,
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    /// Primary text color (main content)
    pub primary: Color32,
    /// Secondary text color (less prominent)
    pub secondary: Color32,
    /// Heading text color
    pub heading: Color32,
    /// Gains (positive returns)
    pub positive: Color32,
    /// Losses (negative returns)
    pub negative: Color32,
}

/// Allocation chart colors
#[derive(Debug, Clone)]
pub struct ChartColors {
    /// Fixed slice palette; slices cycle through it by position
    pub palette: [Color32; 6],
    /// Thin outline between adjacent slices
    pub slice_outline: Color32,
}

/// The current active theme
pub const CURRENT_THEME: Theme = Theme {
    layout: LayoutColors {
        window_background: Color32::from_rgb(246, 247, 251),
        card_background: Color32::WHITE,
        card_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 20),
        card_border: Color32::from_rgb(220, 220, 220),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(60, 60, 60),
        secondary: Color32::from_rgb(120, 120, 120),
        heading: Color32::from_rgb(70, 70, 70),
        positive: Color32::from_rgb(34, 139, 34),
        negative: Color32::from_rgb(220, 20, 60),
    },
    chart: ChartColors {
        palette: [
            Color32::from_rgb(0, 136, 254),   // Blue
            Color32::from_rgb(0, 196, 159),   // Teal
            Color32::from_rgb(255, 187, 40),  // Amber
            Color32::from_rgb(255, 128, 66),  // Orange
            Color32::from_rgb(136, 132, 216), // Violet
            Color32::from_rgb(130, 202, 157), // Green
        ],
        slice_outline: Color32::WHITE,
    },
};

impl Theme {
    /// Color for the allocation slice at the given position.
    ///
    /// Assignment is positional and cyclic: position 6 reuses the color of
    /// position 0.
    pub fn chart_slice_color(&self, index: usize) -> Color32 {
        self.chart.palette[index % self.chart.palette.len()]
    }
}

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;
    pub const TEXT_HEADING: Color32 = CURRENT_THEME.typography.heading;

    pub const CARD_BACKGROUND: Color32 = CURRENT_THEME.layout.card_background;
    pub const CARD_SHADOW: Color32 = CURRENT_THEME.layout.card_shadow;
    pub const CARD_BORDER: Color32 = CURRENT_THEME.layout.card_border;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_colors_cycle_through_palette() {
        let theme = CURRENT_THEME;

        for i in 0..6 {
            assert_eq!(theme.chart_slice_color(i), theme.chart.palette[i]);
        }

        // Positions past the palette reuse colors cyclically
        assert_eq!(theme.chart_slice_color(6), theme.chart.palette[0]);
        assert_eq!(theme.chart_slice_color(7), theme.chart.palette[1]);
        assert_eq!(theme.chart_slice_color(13), theme.chart.palette[1]);
    }
}
