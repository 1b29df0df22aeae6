//! # Error Boundary
//!
//! This module wraps the dashboard subtree and absorbs faults raised while it
//! renders, so a broken view never takes the whole app down.
//!
//! ## Key Components:
//! - `ErrorBoundary` - stateful wrapper with the capture/fallback state
//! - `BoundaryResponse` - tells the host app when a full reload was requested
//!
//! ## Capture model:
//! Two independent safety nets guard the subtree. Panics that unwind out of
//! the rendering closure are intercepted and flip the boundary into its
//! failed state; the fallback view then replaces the subtree until the user
//! reloads. Errors the closure *returns* (faults reported without unwinding)
//! are logged and replaced by a minimal degraded message, without entering
//! the failed state. A given fault takes exactly one of the two paths.

use eframe::egui;
use std::panic::{self, AssertUnwindSafe};

use crate::ui::components::theme::{colors, CURRENT_THEME};

/// Details of a fault captured from the wrapped subtree
#[derive(Debug, Clone)]
pub struct CapturedFault {
    /// Message extracted from the fault payload, when it carried one
    message: Option<String>,
    /// When the fault was absorbed
    captured_at: chrono::DateTime<chrono::Local>,
}

impl CapturedFault {
    /// Message shown in the fallback view
    pub fn display_message(&self) -> &str {
        match &self.message {
            Some(message) if !message.is_empty() => message,
            _ => "Unknown error",
        }
    }
}

/// Rendering outcome reported back to the host app
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryResponse {
    /// The user asked for a full reload of the app
    pub reload_requested: bool,
}

/// Stateful wrapper that absorbs rendering faults from its subtree.
///
/// The boundary never propagates a fault to its caller: it renders either
/// the subtree unmodified or the fallback view, nothing else.
#[derive(Debug, Default)]
pub struct ErrorBoundary {
    /// Set once a fault has been captured; cleared only by the reload action
    fault: Option<CapturedFault>,
}

impl ErrorBoundary {
    /// Create a boundary in the no-fault state
    pub fn new() -> Self {
        Self { fault: None }
    }

    /// Whether a captured fault currently replaces the subtree
    pub fn has_fault(&self) -> bool {
        self.fault.is_some()
    }

    /// Record a captured fault
    pub fn on_fault(&mut self, message: Option<String>) {
        self.fault = Some(CapturedFault {
            message,
            captured_at: chrono::Local::now(),
        });
    }

    /// Reset to the no-fault state and signal a full reload.
    ///
    /// The reload signal is unconditional: exactly one reload per call,
    /// regardless of whether a fault was recorded. The state reset exists so
    /// a stale fallback cannot flash while the host tears the app down.
    pub fn request_reload(&mut self) -> BoundaryResponse {
        self.fault = None;
        BoundaryResponse {
            reload_requested: true,
        }
    }

    /// Render the wrapped subtree, or the fallback view after a fault
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> anyhow::Result<()>,
    ) -> BoundaryResponse {
        if self.fault.is_some() {
            return self.render_fallback(ui);
        }

        match panic::catch_unwind(AssertUnwindSafe(|| add_contents(&mut *ui))) {
            Ok(Ok(())) => BoundaryResponse::default(),
            Ok(Err(error)) => {
                // Fault reported without unwinding: degrade locally only
                log::error!("❌ Dashboard content failed to render: {:#}", error);
                ui.label(
                    egui::RichText::new("Failed to render content")
                        .color(CURRENT_THEME.typography.negative),
                );
                BoundaryResponse::default()
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                let backtrace = std::backtrace::Backtrace::force_capture();
                log::error!(
                    "❌ Captured rendering fault: {}\n{}",
                    message.as_deref().unwrap_or("Unknown error"),
                    backtrace
                );
                self.on_fault(message);
                // Fallback takes over on the very next pass
                ui.ctx().request_repaint();
                BoundaryResponse::default()
            }
        }
    }

    /// Full-screen fallback view with the reload action
    fn render_fallback(&mut self, ui: &mut egui::Ui) -> BoundaryResponse {
        let (message, captured_at) = match &self.fault {
            Some(fault) => (fault.display_message().to_owned(), fault.captured_at),
            None => return BoundaryResponse::default(),
        };

        let mut response = BoundaryResponse::default();

        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 4.0);

            ui.label(egui::RichText::new("⚠")
                .font(egui::FontId::new(44.0, egui::FontFamily::Proportional)));
            ui.add_space(8.0);

            ui.label(
                egui::RichText::new("Something went wrong")
                    .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_HEADING)
                    .strong(),
            );
            ui.label(
                egui::RichText::new(
                    "The dashboard hit an unexpected error. Reload the app to continue.",
                )
                .color(colors::TEXT_SECONDARY),
            );
            ui.add_space(4.0);

            ui.label(
                egui::RichText::new(&message)
                    .font(egui::FontId::new(13.0, egui::FontFamily::Monospace))
                    .color(CURRENT_THEME.typography.negative),
            );
            ui.label(
                egui::RichText::new(format!("Captured at {}", captured_at.format("%H:%M:%S")))
                    .font(egui::FontId::new(11.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_SECONDARY),
            );
            ui.add_space(12.0);

            if ui.button("Reload Page").clicked() {
                log::info!("🔄 Reload requested from the error fallback");
                response = self.request_reload();
            }
        });

        response
    }
}

/// Extract a human-readable message from a panic payload, if it has one
fn panic_message(payload: &(dyn std::any::Any + Send)) -> Option<String> {
    if let Some(message) = payload.downcast_ref::<&str>() {
        Some((*message).to_string())
    } else if let Some(message) = payload.downcast_ref::<String>() {
        Some(message.clone())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Keep the default panic hook from spamming expected test panics
    fn silence_panics<R>(f: impl FnOnce() -> R) -> R {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));
        let result = f();
        panic::set_hook(previous);
        result
    }

    fn run_frame(boundary: &mut ErrorBoundary, content: impl FnMut(&mut egui::Ui) -> anyhow::Result<()>) -> BoundaryResponse {
        let mut content = content;
        let mut response = BoundaryResponse::default();
        let ctx = egui::Context::default();
        let _ = ctx.run(Default::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                response = boundary.show(ui, &mut content);
            });
        });
        response
    }

    #[test]
    fn test_boundary_starts_without_fault() {
        let boundary = ErrorBoundary::new();
        assert!(!boundary.has_fault());
    }

    #[test]
    fn test_clean_subtree_renders_untouched() {
        let mut boundary = ErrorBoundary::new();
        let rendered = Cell::new(false);

        let response = run_frame(&mut boundary, |ui| {
            ui.label("portfolio dashboard");
            rendered.set(true);
            Ok(())
        });

        assert!(rendered.get());
        assert!(!boundary.has_fault());
        assert!(!response.reload_requested);
    }

    #[test]
    fn test_panicking_subtree_is_captured() {
        silence_panics(|| {
            let mut boundary = ErrorBoundary::new();

            let response = run_frame(&mut boundary, |_ui| {
                panic!("allocation data was malformed");
            });

            assert!(boundary.has_fault());
            assert!(!response.reload_requested);
            let fault = boundary.fault.as_ref().unwrap();
            assert_eq!(fault.display_message(), "allocation data was malformed");
        });
    }

    #[test]
    fn test_fallback_replaces_subtree_on_later_frames() {
        silence_panics(|| {
            let mut boundary = ErrorBoundary::new();
            let _ = run_frame(&mut boundary, |_ui| panic!("boom"));
            assert!(boundary.has_fault());

            // The next frame must not run the subtree again
            let ran_again = Cell::new(false);
            let _ = run_frame(&mut boundary, |ui| {
                ui.label("should not appear");
                ran_again.set(true);
                Ok(())
            });
            assert!(!ran_again.get());
            assert!(boundary.has_fault());
        });
    }

    #[test]
    fn test_payload_without_message_shows_unknown_error() {
        silence_panics(|| {
            let mut boundary = ErrorBoundary::new();

            let _ = run_frame(&mut boundary, |_ui| {
                panic::panic_any(42usize);
            });

            assert!(boundary.has_fault());
            let fault = boundary.fault.as_ref().unwrap();
            assert_eq!(fault.display_message(), "Unknown error");
        });
    }

    #[test]
    fn test_empty_message_shows_unknown_error() {
        let mut boundary = ErrorBoundary::new();
        boundary.on_fault(Some(String::new()));
        let fault = boundary.fault.as_ref().unwrap();
        assert_eq!(fault.display_message(), "Unknown error");
    }

    #[test]
    fn test_reported_error_degrades_without_state_change() {
        let mut boundary = ErrorBoundary::new();

        let response = run_frame(&mut boundary, |_ui| {
            Err(anyhow::anyhow!("summary document missing a field"))
        });

        // The reported-error net never enters the failed state
        assert!(!boundary.has_fault());
        assert!(!response.reload_requested);
    }

    #[test]
    fn test_reload_resets_state_and_signals_once() {
        let mut boundary = ErrorBoundary::new();
        boundary.on_fault(Some("boom".to_string()));
        assert!(boundary.has_fault());

        let response = boundary.request_reload();
        assert!(response.reload_requested);
        assert!(!boundary.has_fault());
    }

    #[test]
    fn test_reload_signals_even_without_prior_fault() {
        let mut boundary = ErrorBoundary::new();
        let response = boundary.request_reload();
        assert!(response.reload_requested);
        assert!(!boundary.has_fault());
    }

    #[test]
    fn test_panic_message_extraction() {
        let str_payload = silence_panics(|| {
            panic::catch_unwind(|| panic!("plain message")).unwrap_err()
        });
        assert_eq!(
            panic_message(str_payload.as_ref()),
            Some("plain message".to_string())
        );

        let string_payload = silence_panics(|| {
            panic::catch_unwind(|| panic!("{}-{}", "formatted", 7)).unwrap_err()
        });
        assert_eq!(
            panic_message(string_payload.as_ref()),
            Some("formatted-7".to_string())
        );

        let opaque_payload =
            silence_panics(|| panic::catch_unwind(|| panic::panic_any(3.5f64)).unwrap_err());
        assert_eq!(panic_message(opaque_payload.as_ref()), None);
    }
}
