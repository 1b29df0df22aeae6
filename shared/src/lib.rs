use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One asset class's share of the portfolio allocation breakdown.
///
/// Field names match the `/api/portfolio/summary` payload so the map can be
/// deserialized straight from the backend response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    /// Amount originally invested in this asset class
    pub invested: f64,
    /// Current market value; drives the size of the allocation slice
    pub current_value: f64,
    /// Share of total portfolio value, in percent (0-100)
    pub percentage: f64,
}

/// Overall portfolio summary as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Total amount invested across all holdings
    pub total_invested: f64,
    /// Current market value of the whole portfolio
    pub total_current_value: f64,
    /// Absolute returns (current value minus invested)
    pub total_returns: f64,
    /// Returns as a percentage of the invested amount
    pub returns_percentage: f64,
    /// Number of holdings backing this summary
    pub holdings_count: usize,
    /// Asset allocation keyed by asset type code (e.g. "MF", "STOCK")
    pub asset_allocation: BTreeMap<String, AllocationEntry>,
}

impl PortfolioSummary {
    /// Summary with no holdings and an empty allocation map.
    pub fn empty() -> Self {
        Self {
            total_invested: 0.0,
            total_current_value: 0.0,
            total_returns: 0.0,
            returns_percentage: 0.0,
            holdings_count: 0,
            asset_allocation: BTreeMap::new(),
        }
    }
}

/// Human-readable label for an asset type code used by the backend.
///
/// Unknown codes are shown as-is so new asset types still render.
pub fn asset_type_label(code: &str) -> &str {
    match code {
        "MF" => "Mutual Funds",
        "STOCK" => "Stocks",
        "CRYPTO" => "Crypto",
        "FD" => "Fixed Deposits",
        "PPF" => "PPF",
        "EPF" => "EPF",
        "UNLISTED" => "Unlisted Shares",
        "INSURANCE" => "Insurance",
        "OTHER" => "Other",
        other => other,
    }
}

/// Format an amount in rupees with Indian digit grouping.
///
/// The last three integer digits form one group and every pair above them
/// gets its own separator, so `1234567.89` formats as `₹12,34,567.89`.
pub fn format_inr(amount: f64) -> String {
    let rounded = format!("{:.2}", amount.abs());
    // Amounts that round to zero lose their sign
    let sign = if amount < 0.0 && rounded != "0.00" { "-" } else { "" };
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    format!("{}₹{}.{}", sign, group_indian_digits(int_part), frac_part)
}

/// Insert Indian-style separators into a plain digit string.
fn group_indian_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);

    // Pairs of digits from the right of the head, then whatever is left
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_inr_small_amounts() {
        assert_eq!(format_inr(0.0), "₹0.00");
        assert_eq!(format_inr(5.0), "₹5.00");
        assert_eq!(format_inr(123.45), "₹123.45");
        assert_eq!(format_inr(999.999), "₹1,000.00");
    }

    #[test]
    fn test_format_inr_indian_grouping() {
        assert_eq!(format_inr(1234.5), "₹1,234.50");
        assert_eq!(format_inr(123456.0), "₹1,23,456.00");
        assert_eq!(format_inr(12345678.9), "₹1,23,45,678.90");
        assert_eq!(format_inr(100000.0), "₹1,00,000.00");
    }

    #[test]
    fn test_format_inr_negative_amounts() {
        assert_eq!(format_inr(-1234.5), "-₹1,234.50");
        assert_eq!(format_inr(-0.004), "₹0.00");
    }

    #[test]
    fn test_asset_type_labels() {
        assert_eq!(asset_type_label("MF"), "Mutual Funds");
        assert_eq!(asset_type_label("EPF"), "EPF");
        // Unknown codes pass through untouched
        assert_eq!(asset_type_label("REIT"), "REIT");
    }

    #[test]
    fn test_summary_deserializes_backend_payload() {
        // Field names must stay in sync with the backend summary endpoint
        let payload = r#"{
            "total_invested": 100000.0,
            "total_current_value": 120000.0,
            "total_returns": 20000.0,
            "returns_percentage": 20.0,
            "holdings_count": 3,
            "asset_allocation": {
                "MF": {"invested": 60000.0, "current_value": 70000.0, "percentage": 58.3},
                "STOCK": {"invested": 40000.0, "current_value": 50000.0, "percentage": 41.7}
            }
        }"#;

        let summary: PortfolioSummary = serde_json::from_str(payload).unwrap();
        assert_eq!(summary.holdings_count, 3);
        assert_eq!(summary.asset_allocation.len(), 2);
        assert_eq!(summary.asset_allocation["MF"].current_value, 70000.0);
        assert_eq!(summary.asset_allocation["STOCK"].percentage, 41.7);
    }

    #[test]
    fn test_empty_summary() {
        let summary = PortfolioSummary::empty();
        assert_eq!(summary.total_current_value, 0.0);
        assert!(summary.asset_allocation.is_empty());
    }
}
