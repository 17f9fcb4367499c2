//! Unit sales-pipeline statuses and the transition table between them.
//!
//! The graph is fixed:
//!
//! - `available` -> `reserved`, `on-hold`, `withdrawn`
//! - `reserved`  -> `sold`, `available`, `withdrawn`
//! - `sold`      -> (terminal)
//! - `on-hold`   -> `available`, `withdrawn`
//! - `withdrawn` -> `available`
//!
//! Staying in the same status is always legal at this level; the stricter
//! rule that a sold unit cannot be edited at all lives in
//! [`check_unit_transition`].

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ValidationError};
use crate::unit::Unit;

// ---------------------------------------------------------------------------
// Unit status
// ---------------------------------------------------------------------------

/// Where a unit sits in the sales pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitStatus {
    Available,
    Reserved,
    Sold,
    OnHold,
    Withdrawn,
}

impl UnitStatus {
    /// Return the status name as used by the persistence API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Sold => "sold",
            Self::OnHold => "on-hold",
            Self::Withdrawn => "withdrawn",
        }
    }

    /// Parse a status string. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "available" => Some(Self::Available),
            "reserved" => Some(Self::Reserved),
            "sold" => Some(Self::Sold),
            "on-hold" => Some(Self::OnHold),
            "withdrawn" => Some(Self::Withdrawn),
            _ => None,
        }
    }

    /// All valid status values.
    pub const ALL: &'static [&'static str] =
        &["available", "reserved", "sold", "on-hold", "withdrawn"];

    /// A terminal status has no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        valid_transitions(*self).is_empty()
    }

    /// Reserved and sold units must carry a buyer.
    pub fn requires_buyer(&self) -> bool {
        matches!(self, Self::Reserved | Self::Sold)
    }
}

impl std::fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a status string, rejecting unknown values with a [`CoreError`].
pub fn parse_status(s: &str) -> Result<UnitStatus, CoreError> {
    UnitStatus::from_str(s.trim()).ok_or_else(|| CoreError::InvalidStatus(s.to_string()))
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

/// Returns the set of statuses that `from` may move to.
pub fn valid_transitions(from: UnitStatus) -> &'static [UnitStatus] {
    use UnitStatus::*;
    match from {
        Available => &[Reserved, OnHold, Withdrawn],
        Reserved => &[Sold, Available, Withdrawn],
        Sold => &[],
        OnHold => &[Available, Withdrawn],
        Withdrawn => &[Available],
    }
}

/// Check a bare status change against the transition table.
pub fn check_transition(from: UnitStatus, to: UnitStatus) -> Result<(), ValidationError> {
    if from == to || valid_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(ValidationError::InvalidStatusTransition { from, to })
    }
}

/// Check a full proposed unit against the current snapshot.
///
/// A sold unit accepts only an exact no-op: any change to a listing field
/// is reported as a transition out of `sold`. Corrections to sold records
/// go through a separate administrative path.
pub fn check_unit_transition(current: &Unit, proposed: &Unit) -> Result<(), ValidationError> {
    if current.status.is_terminal() {
        if proposed.status == current.status && current.is_unchanged_by(proposed) {
            return Ok(());
        }
        return Err(ValidationError::InvalidStatusTransition {
            from: current.status,
            to: proposed.status,
        });
    }
    check_transition(current.status, proposed.status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    use crate::unit::test_support::sample_unit;
    use crate::unit::Buyer;

    const ALL_STATUSES: [UnitStatus; 5] = [
        UnitStatus::Available,
        UnitStatus::Reserved,
        UnitStatus::Sold,
        UnitStatus::OnHold,
        UnitStatus::Withdrawn,
    ];

    #[test]
    fn as_str_and_from_str_agree() {
        for status in ALL_STATUSES {
            assert_eq!(UnitStatus::from_str(status.as_str()), Some(status));
            assert!(UnitStatus::ALL.contains(&status.as_str()));
        }
        assert_eq!(UnitStatus::ALL.len(), ALL_STATUSES.len());
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_eq!(UnitStatus::from_str("not_released"), None);
        assert_matches!(parse_status("pending"), Err(CoreError::InvalidStatus(s)) if s == "pending");
        assert_eq!(parse_status(" on-hold ").unwrap(), UnitStatus::OnHold);
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&UnitStatus::OnHold).unwrap();
        assert_eq!(json, "\"on-hold\"");
        let parsed: UnitStatus = serde_json::from_str("\"withdrawn\"").unwrap();
        assert_eq!(parsed, UnitStatus::Withdrawn);
    }

    #[test]
    fn only_sold_is_terminal() {
        for status in ALL_STATUSES {
            assert_eq!(status.is_terminal(), status == UnitStatus::Sold);
        }
    }

    #[test]
    fn reserved_and_sold_require_buyer() {
        assert!(UnitStatus::Reserved.requires_buyer());
        assert!(UnitStatus::Sold.requires_buyer());
        assert!(!UnitStatus::Available.requires_buyer());
        assert!(!UnitStatus::OnHold.requires_buyer());
        assert!(!UnitStatus::Withdrawn.requires_buyer());
    }

    #[test]
    fn table_allows_listed_transitions() {
        use UnitStatus::*;
        for (from, to) in [
            (Available, Reserved),
            (Available, OnHold),
            (Available, Withdrawn),
            (Reserved, Sold),
            (Reserved, Available),
            (Reserved, Withdrawn),
            (OnHold, Available),
            (OnHold, Withdrawn),
            (Withdrawn, Available),
        ] {
            assert!(check_transition(from, to).is_ok(), "{from} -> {to}");
        }
    }

    #[test]
    fn table_rejects_jumps() {
        use UnitStatus::*;
        for (from, to) in [
            (Available, Sold),
            (OnHold, Reserved),
            (OnHold, Sold),
            (Withdrawn, Reserved),
            (Withdrawn, OnHold),
            (Sold, Available),
            (Sold, Reserved),
        ] {
            assert_eq!(
                check_transition(from, to),
                Err(ValidationError::InvalidStatusTransition { from, to }),
            );
        }
    }

    #[test]
    fn same_status_is_always_legal_in_table() {
        for status in ALL_STATUSES {
            assert!(check_transition(status, status).is_ok());
        }
    }

    fn sold_unit() -> Unit {
        let mut unit = sample_unit();
        unit.status = UnitStatus::Sold;
        unit.buyer = Some(Buyer {
            name: "Aoife Byrne".into(),
            email: "aoife@example.ie".into(),
            ..Buyer::default()
        });
        unit
    }

    #[test]
    fn sold_unit_accepts_exact_noop() {
        let unit = sold_unit();
        assert!(check_unit_transition(&unit, &unit).is_ok());
    }

    #[test]
    fn sold_unit_rejects_any_status_change() {
        let current = sold_unit();
        for to in ALL_STATUSES.into_iter().filter(|s| *s != UnitStatus::Sold) {
            let mut proposed = current.clone();
            proposed.status = to;
            assert_eq!(
                check_unit_transition(&current, &proposed),
                Err(ValidationError::InvalidStatusTransition {
                    from: UnitStatus::Sold,
                    to,
                }),
            );
        }
    }

    #[test]
    fn sold_unit_rejects_field_edits() {
        let current = sold_unit();
        let mut proposed = current.clone();
        proposed.current_price += 1_000.0;
        assert_matches!(
            check_unit_transition(&current, &proposed),
            Err(ValidationError::InvalidStatusTransition {
                from: UnitStatus::Sold,
                to: UnitStatus::Sold,
            })
        );
    }

    #[test]
    fn sold_unit_ignores_recomputed_grant() {
        let current = sold_unit();
        let mut proposed = current.clone();
        proposed.estimated_htb_grant = Some(12_345.0);
        assert!(check_unit_transition(&current, &proposed).is_ok());
    }
}
