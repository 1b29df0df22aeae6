//! # UI Components Module
//!
//! This module organizes all UI components for the investment tracker
//! dashboard. Each submodule handles a specific aspect of the interface.
//!
//! ## Module Organization:
//! - `allocation_chart` - Asset allocation pie chart with labels and legend
//! - `error_boundary` - Fault-absorbing wrapper around the dashboard subtree
//! - `styling` - Global style setup and card drawing helpers
//! - `theme` - Color and palette configuration

pub mod allocation_chart;
pub mod error_boundary;
pub mod styling;
pub mod theme;

pub use allocation_chart::AllocationPieChart;
pub use error_boundary::{BoundaryResponse, ErrorBoundary};
pub use styling::{draw_card_container, setup_app_style};
pub use theme::*;
