//! Unit snapshots and proposed updates.
//!
//! Field names serialize in camelCase to match the persistence API payloads
//! (`currentPrice`, `floorAreaSqFt`, `htbEligible`, ...). The derived grant
//! keeps the store's `estimatedHTBGrant` spelling.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::status::UnitStatus;
use crate::types::UnitId;

/// Purchaser attached to a reserved or sold unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Buyer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub solicitor: String,
}

impl Buyer {
    /// Name and email are the minimum needed to hold a reservation.
    pub fn has_contact(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }
}

/// A single sellable property within a development, as read from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: UnitId,
    /// Missing or `null` reads as empty so it reaches the field validator.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub number: String,
    pub status: UnitStatus,
    /// Zero when the unit has never been priced.
    #[serde(default)]
    pub current_price: f64,
    #[serde(default)]
    pub bedrooms: i64,
    #[serde(default)]
    pub bathrooms: i64,
    #[serde(default)]
    pub floor_area_sq_ft: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer: Option<Buyer>,
    #[serde(default)]
    pub htb_eligible: bool,
    /// Derived from price; recomputed on every accepted update.
    #[serde(
        rename = "estimatedHTBGrant",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_htb_grant: Option<f64>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Unit {
    /// Whether applying `proposed` would leave every listing field as it is.
    ///
    /// The derived grant is ignored, and a proposal that omits the buyer
    /// keeps the existing one.
    pub fn is_unchanged_by(&self, proposed: &Unit) -> bool {
        self.id == proposed.id
            && self.number == proposed.number
            && self.status == proposed.status
            && self.current_price == proposed.current_price
            && self.bedrooms == proposed.bedrooms
            && self.bathrooms == proposed.bathrooms
            && self.floor_area_sq_ft == proposed.floor_area_sq_ft
            && self.htb_eligible == proposed.htb_eligible
            && (proposed.buyer.is_none() || proposed.buyer == self.buyer)
    }
}

/// Candidate new state for a unit, as built by an edit form.
///
/// Never trusted until it has passed
/// [`validate_unit_update`](crate::validation::validate_unit_update).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedUpdate {
    #[serde(flatten)]
    pub unit: Unit,
    /// Free text kept for the audit trail only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ProposedUpdate {
    pub fn new(unit: Unit) -> Self {
        Self { unit, reason: None }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

impl From<Unit> for ProposedUpdate {
    fn from(unit: Unit) -> Self {
        Self::new(unit)
    }
}

/// Parse a unit snapshot from its JSON representation.
pub fn parse_unit(json: &str) -> Result<Unit, CoreError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a proposed update from its JSON representation.
pub fn parse_proposed_update(json: &str) -> Result<ProposedUpdate, CoreError> {
    Ok(serde_json::from_str(json)?)
}
