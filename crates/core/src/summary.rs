//! Development-level statistics over a set of unit snapshots.

use serde::Serialize;

use crate::pricing::htb_grant_for;
use crate::status::UnitStatus;
use crate::unit::Unit;

/// Counts and totals for a development's units.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total: usize,
    pub available: usize,
    pub reserved: usize,
    pub sold: usize,
    pub on_hold: usize,
    pub withdrawn: usize,
    /// Sum of current prices across all units.
    pub total_value: f64,
    pub htb_eligible: usize,
    /// Sum of grants at current prices for HTB-eligible units.
    pub estimated_htb_total: f64,
}

pub fn summarize_units(units: &[Unit]) -> PortfolioSummary {
    units
        .iter()
        .fold(PortfolioSummary::default(), |mut summary, unit| {
            summary.total += 1;
            match unit.status {
                UnitStatus::Available => summary.available += 1,
                UnitStatus::Reserved => summary.reserved += 1,
                UnitStatus::Sold => summary.sold += 1,
                UnitStatus::OnHold => summary.on_hold += 1,
                UnitStatus::Withdrawn => summary.withdrawn += 1,
            }
            summary.total_value += unit.current_price;
            if unit.htb_eligible {
                summary.htb_eligible += 1;
                summary.estimated_htb_total += htb_grant_for(unit);
            }
            summary
        })
}
