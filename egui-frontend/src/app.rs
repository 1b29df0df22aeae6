//! # App Module
//!
//! This module contains the top-level eframe application: it owns the core
//! state, wraps the dashboard subtree in the error boundary, and services
//! reload requests by rebuilding the whole application from scratch.

use eframe::egui;

use crate::ui::components::error_boundary::ErrorBoundary;
use crate::ui::state::AppState;

/// Top-level application wiring state and the error boundary together
pub struct InvestmentTrackerApp {
    /// Core application state (portfolio data and chart)
    state: AppState,

    /// Absorbs faults raised while the dashboard renders
    boundary: ErrorBoundary,
}

impl InvestmentTrackerApp {
    /// Create the app with freshly loaded portfolio data
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
            boundary: ErrorBoundary::new(),
        }
    }

    /// Tear down and rebuild the whole application state.
    ///
    /// This is the desktop counterpart of a full page reload: the portfolio
    /// document is re-read, the boundary starts clean, and egui's retained
    /// memory (scroll positions, open popups) is discarded.
    fn reload(&mut self, ctx: &egui::Context) {
        log::info!("🔄 Performing full application reload");
        self.state = AppState::new();
        self.boundary = ErrorBoundary::new();
        ctx.memory_mut(|memory| *memory = Default::default());
        ctx.request_repaint();
    }
}

impl eframe::App for InvestmentTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut reload_requested = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            let Self { state, boundary } = self;
            let response = boundary.show(ui, |ui| state.draw_dashboard(ui));
            reload_requested = response.reload_requested;
        });

        if reload_requested {
            self.reload(ctx);
        }
    }
}
