//! # Portfolio Summary Loading
//!
//! This module reads the portfolio summary document exported by the backend
//! sync job from the user data directory. When the document is missing or
//! unreadable the app keeps working on a bundled sample summary, so a fresh
//! install still shows a populated dashboard.

use shared::{AllocationEntry, PortfolioSummary};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while locating or reading the summary document
#[derive(Debug, Error)]
pub enum PortfolioDataError {
    #[error("no user data directory available on this platform")]
    NoDataDir,

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Default on-disk location of the summary document
pub fn summary_path() -> Result<PathBuf, PortfolioDataError> {
    let base = dirs::data_dir().ok_or(PortfolioDataError::NoDataDir)?;
    Ok(base.join("investment-tracker").join("portfolio_summary.json"))
}

/// Load the portfolio summary from its default location
pub fn load_portfolio_summary() -> Result<PortfolioSummary, PortfolioDataError> {
    load_summary_from(&summary_path()?)
}

/// Load a portfolio summary document from the given path
pub fn load_summary_from(path: &Path) -> Result<PortfolioSummary, PortfolioDataError> {
    let raw = fs::read_to_string(path).map_err(|source| PortfolioDataError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let summary: PortfolioSummary =
        serde_json::from_str(&raw).map_err(|source| PortfolioDataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!(
        "📄 Loaded portfolio summary from {} ({} asset classes)",
        path.display(),
        summary.asset_allocation.len()
    );
    Ok(summary)
}

/// Bundled sample summary shown until a real document exists.
///
/// Seven asset classes on purpose: one more than the chart palette, so the
/// sample also exercises color reuse.
pub fn sample_summary() -> PortfolioSummary {
    let mut asset_allocation = BTreeMap::new();
    asset_allocation.insert(
        "MF".to_string(),
        AllocationEntry {
            invested: 520000.0,
            current_value: 611000.0,
            percentage: 35.5,
        },
    );
    asset_allocation.insert(
        "STOCK".to_string(),
        AllocationEntry {
            invested: 310000.0,
            current_value: 342500.0,
            percentage: 19.9,
        },
    );
    asset_allocation.insert(
        "CRYPTO".to_string(),
        AllocationEntry {
            invested: 80000.0,
            current_value: 64000.0,
            percentage: 3.7,
        },
    );
    asset_allocation.insert(
        "FD".to_string(),
        AllocationEntry {
            invested: 200000.0,
            current_value: 216000.0,
            percentage: 12.6,
        },
    );
    asset_allocation.insert(
        "PPF".to_string(),
        AllocationEntry {
            invested: 150000.0,
            current_value: 171300.0,
            percentage: 10.0,
        },
    );
    asset_allocation.insert(
        "EPF".to_string(),
        AllocationEntry {
            invested: 240000.0,
            current_value: 265200.0,
            percentage: 15.4,
        },
    );
    asset_allocation.insert(
        "UNLISTED".to_string(),
        AllocationEntry {
            invested: 50000.0,
            current_value: 50000.0,
            percentage: 2.9,
        },
    );

    PortfolioSummary {
        total_invested: 1550000.0,
        total_current_value: 1720000.0,
        total_returns: 170000.0,
        returns_percentage: 10.97,
        holdings_count: 23,
        asset_allocation,
    }
}
