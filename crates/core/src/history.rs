//! Price history entries recorded after an accepted price change.
//!
//! The engine never reads a clock; the caller passes the timestamp it will
//! persist alongside the update.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;
use crate::unit::Unit;

/// Reason recorded when the caller did not supply one.
pub const DEFAULT_PRICE_CHANGE_REASON: &str = "Developer price update";

/// One entry in a unit's price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryEntry {
    pub price: f64,
    pub date: Timestamp,
    pub reason: String,
}

/// Build the history entry for moving from `previous` to `accepted`.
///
/// Returns `None` when the price did not change.
pub fn record_price_change(
    previous: &Unit,
    accepted: &Unit,
    reason: Option<&str>,
    at: Timestamp,
) -> Option<PriceHistoryEntry> {
    if previous.current_price == accepted.current_price {
        return None;
    }

    let reason = reason
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(DEFAULT_PRICE_CHANGE_REASON);

    Some(PriceHistoryEntry {
        price: accepted.current_price,
        date: at,
        reason: reason.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::unit::test_support::sample_unit;

    fn at() -> Timestamp {
        chrono::Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn unchanged_price_records_nothing() {
        let unit = sample_unit();
        assert_eq!(record_price_change(&unit, &unit, Some("noop"), at()), None);
    }

    #[test]
    fn records_new_price_with_reason() {
        let previous = sample_unit();
        let mut accepted = previous.clone();
        accepted.current_price = 315_000.0;
        let entry = record_price_change(&previous, &accepted, Some("Phase 2 release"), at()).unwrap();
        assert_eq!(entry.price, 315_000.0);
        assert_eq!(entry.date, at());
        assert_eq!(entry.reason, "Phase 2 release");
    }

    #[test]
    fn blank_reason_falls_back_to_default() {
        let previous = sample_unit();
        let mut accepted = previous.clone();
        accepted.current_price = 290_000.0;
        let entry = record_price_change(&previous, &accepted, Some("  "), at()).unwrap();
        assert_eq!(entry.reason, DEFAULT_PRICE_CHANGE_REASON);
    }
}
