//! Price bounds, price-change approval and Help-to-Buy grant calculation.
//!
//! Prices are currency-agnostic: callers pick major or minor units and stay
//! consistent. The bounds and HTB bands below assume major units (euro).

use crate::error::ValidationError;
use crate::unit::Unit;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Lowest accepted unit price.
pub const MIN_PRICE: f64 = 50_000.0;

/// Highest accepted unit price.
pub const MAX_PRICE: f64 = 2_000_000.0;

/// Price rises above this percentage need sign-off before they are accepted.
pub const MAX_UNAPPROVED_INCREASE_PERCENT: f64 = 10.0;

/// Units priced above this are not HTB eligible.
pub const HTB_PRICE_CAP: f64 = 500_000.0;

/// Upper edge of the lower HTB band.
pub const HTB_LOWER_BAND_LIMIT: f64 = 320_000.0;

/// Grant rate applied up to [`HTB_LOWER_BAND_LIMIT`].
pub const HTB_LOWER_BAND_RATE: f64 = 0.05;

/// Grant rate applied to the portion above [`HTB_LOWER_BAND_LIMIT`].
pub const HTB_UPPER_BAND_RATE: f64 = 0.10;

/// Smallest grant reported for an eligible price.
pub const HTB_MIN_GRANT: f64 = 10_000.0;

/// Largest grant reported for an eligible price.
pub const HTB_MAX_GRANT: f64 = 30_000.0;

// ---------------------------------------------------------------------------
// Help-to-Buy
// ---------------------------------------------------------------------------

/// Compute the Help-to-Buy grant for a purchase price.
///
/// Prices above [`HTB_PRICE_CAP`] get nothing. Eligible prices are banded
/// and then clamped to `[HTB_MIN_GRANT, HTB_MAX_GRANT]`; the eligibility
/// check runs first, so ineligible prices report 0 rather than the floor.
pub fn compute_htb_grant(price: f64) -> f64 {
    if price > HTB_PRICE_CAP || price.is_nan() {
        return 0.0;
    }

    let grant = if price <= HTB_LOWER_BAND_LIMIT {
        price * HTB_LOWER_BAND_RATE
    } else {
        HTB_LOWER_BAND_LIMIT * HTB_LOWER_BAND_RATE
            + (price - HTB_LOWER_BAND_LIMIT) * HTB_UPPER_BAND_RATE
    };

    grant.clamp(HTB_MIN_GRANT, HTB_MAX_GRANT)
}

/// Grant a unit would receive at its current price, or 0 when the unit is
/// not flagged as HTB eligible.
pub fn htb_grant_for(unit: &Unit) -> f64 {
    if unit.htb_eligible {
        compute_htb_grant(unit.current_price)
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Price changes
// ---------------------------------------------------------------------------

/// Percentage change from `old` to `new`.
///
/// Returns `None` when there is no prior price to compare against.
pub fn percent_change(old: f64, new: f64) -> Option<f64> {
    if old > 0.0 {
        Some((new - old) / old * 100.0)
    } else {
        None
    }
}

/// Outcome of checking a proposed price against the current one.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceValidation {
    pub errors: Vec<ValidationError>,
    /// `None` for units that had no prior price.
    pub percent_change: Option<f64>,
    /// Grant at the proposed price; 0 unless the unit is HTB eligible.
    pub estimated_htb_grant: f64,
}

impl PriceValidation {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate the price in `proposed` against `current` and recompute the
/// HTB grant at the new price.
///
/// Both the bounds check and the approval threshold are evaluated, so a
/// price that is out of range and also a large jump reports both.
pub fn validate_price_change(current: &Unit, proposed: &Unit) -> PriceValidation {
    let mut errors = Vec::new();
    let price = proposed.current_price;

    if !(MIN_PRICE..=MAX_PRICE).contains(&price) {
        errors.push(ValidationError::PriceOutOfBounds { price });
    }

    let change = percent_change(current.current_price, price);
    if let Some(percent_increase) = change.filter(|p| *p > MAX_UNAPPROVED_INCREASE_PERCENT) {
        errors.push(ValidationError::PriceIncreaseRequiresApproval { percent_increase });
    }

    PriceValidation {
        errors,
        percent_change: change,
        estimated_htb_grant: htb_grant_for(proposed),
    }
}
