//! Audit record handed to the compliance log after a validation run.

use serde::Serialize;

use estate_core::history::{record_price_change, PriceHistoryEntry};
use estate_core::types::Timestamp;
use estate_core::{ProposedUpdate, Unit, ValidationResult};

/// Who asked for which change, and what the rules engine said.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    pub actor: String,
    pub timestamp: Timestamp,
    pub current: Unit,
    pub proposed: ProposedUpdate,
    pub result: ValidationResult,
    /// Set only for accepted updates that change the price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_history: Option<PriceHistoryEntry>,
}

impl AuditRecord {
    pub fn new(
        actor: impl Into<String>,
        timestamp: Timestamp,
        current: Unit,
        proposed: ProposedUpdate,
        result: ValidationResult,
    ) -> Self {
        let price_history = result.normalized_update.as_ref().and_then(|accepted| {
            record_price_change(
                &current,
                &accepted.unit,
                accepted.reason.as_deref(),
                timestamp,
            )
        });

        Self {
            actor: actor.into(),
            timestamp,
            current,
            proposed,
            result,
            price_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use estate_core::{validate_unit_update, UnitStatus};

    fn unit(price: f64) -> Unit {
        Unit {
            id: "u1".into(),
            number: "1".into(),
            status: UnitStatus::Available,
            current_price: price,
            bedrooms: 2,
            bathrooms: 1,
            floor_area_sq_ft: 700,
            buyer: None,
            htb_eligible: false,
            estimated_htb_grant: None,
        }
    }

    fn at() -> Timestamp {
        chrono::Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn accepted_price_change_is_recorded() {
        let current = unit(300_000.0);
        let proposed = ProposedUpdate::new(unit(310_000.0)).with_reason("Market adjustment");
        let result = validate_unit_update(&current, &proposed);
        let record = AuditRecord::new("ops", at(), current, proposed, result);
        let entry = record.price_history.expect("price changed");
        assert_eq!(entry.price, 310_000.0);
        assert_eq!(entry.reason, "Market adjustment");
    }

    #[test]
    fn rejected_update_has_no_history() {
        let current = unit(300_000.0);
        let proposed = ProposedUpdate::new(unit(500_000.0));
        let result = validate_unit_update(&current, &proposed);
        let record = AuditRecord::new("ops", at(), current, proposed, result);
        assert!(record.price_history.is_none());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["result"]["ok"], false);
        assert!(json.get("priceHistory").is_none());
    }
}
