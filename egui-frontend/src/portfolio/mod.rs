//! # Portfolio Module
//!
//! This module owns access to the portfolio summary data displayed by the
//! dashboard: locating the summary document on disk, deserializing it, and
//! providing the bundled sample used before any real data exists.

pub mod loader;

pub use loader::{load_portfolio_summary, sample_summary, PortfolioDataError};
