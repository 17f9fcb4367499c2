//! Field-level structural checks on a proposed unit.
//!
//! Every check runs and every failure is collected, so a form can show all
//! problems at once.

use validator::ValidateEmail;

use crate::error::ValidationError;
use crate::unit::{Buyer, Unit};

/// Bedroom and bathroom counts must fall in `[MIN_ROOMS, MAX_ROOMS]`.
pub const MIN_ROOMS: i64 = 0;
pub const MAX_ROOMS: i64 = 10;

/// Floor area bounds in square feet.
pub const MIN_FLOOR_AREA_SQ_FT: i64 = 100;
pub const MAX_FLOOR_AREA_SQ_FT: i64 = 5000;

/// Check that `value` lies in `[min, max]`, naming `field` on failure.
pub fn validate_range(
    value: i64,
    min: i64,
    max: i64,
    field: &'static str,
) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::FieldOutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Whether `email` has the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    email.validate_email()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// The buyer that would be attached to the unit after the update.
///
/// A proposal that omits the buyer keeps the one already on a reserved or
/// sold unit. Buyers on other statuses are never carried forward.
pub fn effective_buyer<'a>(current: &'a Unit, proposed: &'a Unit) -> Option<&'a Buyer> {
    proposed.buyer.as_ref().or_else(|| {
        if current.status.requires_buyer() {
            current.buyer.as_ref()
        } else {
            None
        }
    })
}

/// Run every field check on `proposed` and return the violations found.
pub fn validate_fields(current: &Unit, proposed: &Unit) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if proposed.number.trim().is_empty() {
        errors.push(ValidationError::MissingUnitNumber);
    }

    let ranges = [
        (proposed.bedrooms, MIN_ROOMS, MAX_ROOMS, "bedrooms"),
        (proposed.bathrooms, MIN_ROOMS, MAX_ROOMS, "bathrooms"),
        (
            proposed.floor_area_sq_ft,
            MIN_FLOOR_AREA_SQ_FT,
            MAX_FLOOR_AREA_SQ_FT,
            "floorAreaSqFt",
        ),
    ];
    errors.extend(
        ranges
            .into_iter()
            .filter_map(|(value, min, max, field)| validate_range(value, min, max, field).err()),
    );

    // An empty email is a missing-buyer problem, not a format problem.
    if let Some(buyer) = &proposed.buyer {
        let email = buyer.email.trim();
        if !email.is_empty() && !is_valid_email(email) {
            errors.push(ValidationError::InvalidEmail {
                email: buyer.email.clone(),
            });
        }
    }

    if proposed.status.requires_buyer()
        && !effective_buyer(current, proposed).is_some_and(Buyer::has_contact)
    {
        errors.push(ValidationError::MissingBuyerInfo {
            status: proposed.status,
        });
    }

    errors
}
