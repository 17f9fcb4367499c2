use serde::Serialize;

use crate::pricing::{MAX_PRICE, MAX_UNAPPROVED_INCREASE_PERCENT, MIN_PRICE};
use crate::status::UnitStatus;

/// Failures turning caller input into domain values.
///
/// These are distinct from [`ValidationError`]: a `CoreError` means the
/// input could not even be read as a unit, so no rules were evaluated.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid unit status '{0}'. Must be one of: {statuses}", statuses = UnitStatus::ALL.join(", "))]
    InvalidStatus(String),

    #[error("Malformed unit snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// A single business-rule violation found while validating a unit update.
///
/// Every variant is recoverable: the caller fixes the input and resubmits.
/// Serialized as `{ "kind": "<Variant>", ...fields }` so a form layer can
/// group errors per field.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all_fields = "camelCase")]
pub enum ValidationError {
    #[error("Unit number is required")]
    MissingUnitNumber,

    #[error("{field} must be between {min} and {max}, got {value}")]
    FieldOutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Invalid buyer email '{email}'")]
    InvalidEmail { email: String },

    #[error("Buyer name and email are required for a {status} unit")]
    MissingBuyerInfo { status: UnitStatus },

    #[error("Cannot transition unit from '{from}' to '{to}'")]
    InvalidStatusTransition { from: UnitStatus, to: UnitStatus },

    #[error("Price {price} is outside the allowed range {}..={}", MIN_PRICE, MAX_PRICE)]
    PriceOutOfBounds { price: f64 },

    #[error(
        "Price increase of {percent_increase:.1}% exceeds {}% and requires approval",
        MAX_UNAPPROVED_INCREASE_PERCENT
    )]
    PriceIncreaseRequiresApproval { percent_increase: f64 },
}

impl ValidationError {
    /// Stable machine-readable code for this violation.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingUnitNumber => "MISSING_UNIT_NUMBER",
            Self::FieldOutOfRange { .. } => "FIELD_OUT_OF_RANGE",
            Self::InvalidEmail { .. } => "INVALID_EMAIL",
            Self::MissingBuyerInfo { .. } => "MISSING_BUYER_INFO",
            Self::InvalidStatusTransition { .. } => "INVALID_STATUS_TRANSITION",
            Self::PriceOutOfBounds { .. } => "PRICE_OUT_OF_BOUNDS",
            Self::PriceIncreaseRequiresApproval { .. } => "PRICE_INCREASE_REQUIRES_APPROVAL",
        }
    }

    /// The serialized field name this violation should be shown against.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingUnitNumber => "number",
            Self::FieldOutOfRange { field, .. } => *field,
            Self::InvalidEmail { .. } => "buyer.email",
            Self::MissingBuyerInfo { .. } => "buyer",
            Self::InvalidStatusTransition { .. } => "status",
            Self::PriceOutOfBounds { .. } | Self::PriceIncreaseRequiresApproval { .. } => {
                "currentPrice"
            }
        }
    }

    /// Whether resubmitting with an approval (rather than different values)
    /// can clear this violation.
    pub fn needs_approval(&self) -> bool {
        matches!(self, Self::PriceIncreaseRequiresApproval { .. })
    }
}
