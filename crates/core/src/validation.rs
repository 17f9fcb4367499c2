//! Single entry point for validating a proposed unit update.
//!
//! Runs field checks, then the status transition check, then price and HTB
//! validation. All three always run so the caller sees every violation.
//! Nothing here writes, logs, or reads a clock.

use serde::Serialize;

use crate::error::ValidationError;
use crate::fields::{effective_buyer, validate_fields};
use crate::pricing::validate_price_change;
use crate::status::check_unit_transition;
use crate::unit::{Buyer, ProposedUpdate, Unit};

/// Accept/reject outcome for a proposed update.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub ok: bool,
    pub errors: Vec<ValidationError>,
    /// Present only when `ok` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_update: Option<ProposedUpdate>,
}

impl ValidationResult {
    fn rejected(errors: Vec<ValidationError>) -> Self {
        Self {
            ok: false,
            errors,
            normalized_update: None,
        }
    }

    fn accepted(update: ProposedUpdate) -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            normalized_update: Some(update),
        }
    }

    /// True when every violation can be cleared by obtaining approval.
    pub fn needs_approval_only(&self) -> bool {
        !self.errors.is_empty() && self.errors.iter().all(ValidationError::needs_approval)
    }
}

/// Validate `proposed` against the authoritative `current` snapshot.
pub fn validate_unit_update(current: &Unit, proposed: &ProposedUpdate) -> ValidationResult {
    let candidate = &proposed.unit;

    let mut errors = validate_fields(current, candidate);
    if let Err(e) = check_unit_transition(current, candidate) {
        errors.push(e);
    }
    let price = validate_price_change(current, candidate);
    errors.extend(price.errors);

    if !errors.is_empty() {
        return ValidationResult::rejected(errors);
    }

    let mut unit = candidate.clone();
    unit.number = unit.number.trim().to_string();
    unit.buyer = if unit.status.requires_buyer() {
        effective_buyer(current, candidate).map(|buyer| Buyer {
            name: buyer.name.trim().to_string(),
            email: buyer.email.trim().to_string(),
            ..buyer.clone()
        })
    } else {
        None
    };
    unit.estimated_htb_grant = Some(price.estimated_htb_grant);

    ValidationResult::accepted(ProposedUpdate {
        unit,
        reason: proposed.reason.clone(),
    })
}
