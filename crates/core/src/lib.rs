//! Business rules for updating property units in a development.
//!
//! Everything in this crate is pure: no I/O, no logging, no clock. Callers
//! read a [`Unit`] snapshot from their store, build a [`ProposedUpdate`],
//! and persist only when [`validate_unit_update`] returns `ok`.

pub mod error;
pub mod fields;
pub mod history;
pub mod pricing;
pub mod status;
pub mod summary;
pub mod types;
pub mod unit;
pub mod validation;

pub use error::{CoreError, ValidationError};
pub use pricing::compute_htb_grant;
pub use status::UnitStatus;
pub use unit::{Buyer, ProposedUpdate, Unit};
pub use validation::{validate_unit_update, ValidationResult};
