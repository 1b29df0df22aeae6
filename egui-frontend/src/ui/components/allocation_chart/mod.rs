//! # Allocation Chart Module
//!
//! This module provides the asset allocation pie chart for the portfolio
//! dashboard.
//!
//! ## Key Components:
//! - `renderer.rs` - Pie rendering with egui painting primitives
//! - `data_preparation.rs` - Allocation map to slice sequence transformation
//!
//! ## Purpose:
//! Visualizes how the portfolio's current value is split across asset
//! classes, with per-slice percentage labels, hover tooltips showing the
//! formatted value, and a legend of all asset classes.

pub mod data_preparation;
pub mod renderer;

// Re-export main components
pub use data_preparation::{prepare_allocation_slices, AllocationSlice};
pub use renderer::{AllocationChartConfig, AllocationPieChart, CurrencyFormatter};
