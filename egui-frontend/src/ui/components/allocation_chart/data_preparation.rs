//! # Allocation Chart Data Preparation
//!
//! This module turns the asset allocation map from the portfolio summary into
//! the ordered slice sequence the renderer paints. Keeping the transformation
//! separate from painting keeps it unit-testable without a UI context.

use shared::{asset_type_label, AllocationEntry};
use std::collections::BTreeMap;

/// One renderable slice of the allocation pie
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationSlice {
    /// Asset type code this slice was keyed under (e.g. "MF")
    pub code: String,
    /// Display name shown in labels and the legend
    pub name: String,
    /// Current value driving the slice size
    pub value: f64,
    /// Percentage share reported by the backend (0-100)
    pub percentage: f64,
    /// Fraction of the full circle this slice covers (value / total)
    pub fraction: f64,
}

impl AllocationSlice {
    /// Label drawn next to the slice, with the percentage rounded to one
    /// decimal place (e.g. "Mutual Funds: 58.3%").
    pub fn label(&self) -> String {
        format!("{}: {:.1}%", self.name, self.percentage)
    }
}

/// Convert the allocation map into the ordered slice sequence.
///
/// Map iteration order is preserved and determines color assignment and
/// legend order. Entries with zero or negative `current_value` are kept
/// as-is so the slice count always matches the entry count; how they paint
/// is up to the renderer.
pub fn prepare_allocation_slices(
    allocation: &BTreeMap<String, AllocationEntry>,
) -> Vec<AllocationSlice> {
    let total: f64 = allocation.values().map(|entry| entry.current_value).sum();

    allocation
        .iter()
        .map(|(code, entry)| AllocationSlice {
            code: code.clone(),
            name: asset_type_label(code).to_string(),
            value: entry.current_value,
            percentage: entry.percentage,
            fraction: if total > 0.0 {
                entry.current_value / total
            } else {
                0.0
            },
        })
        .collect()
}
