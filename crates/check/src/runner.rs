//! Load snapshots from disk, validate, and render the outcome.

use std::path::Path;

use anyhow::Context;

use estate_core::types::Timestamp;
use estate_core::unit::{parse_proposed_update, parse_unit};
use estate_core::{validate_unit_update, ProposedUpdate, Unit, ValidationResult};

use crate::audit::AuditRecord;
use crate::config::CheckConfig;

/// Process exit code for an accepted update.
pub const EXIT_ACCEPTED: i32 = 0;

/// Process exit code for a rejected update.
pub const EXIT_REJECTED: i32 = 2;

/// Result of one harness run, ready to print.
#[derive(Debug)]
pub struct CheckOutcome {
    pub result: ValidationResult,
    /// JSON document for stdout.
    pub output: String,
}

impl CheckOutcome {
    pub fn exit_code(&self) -> i32 {
        if self.result.ok {
            EXIT_ACCEPTED
        } else {
            EXIT_REJECTED
        }
    }
}

pub fn load_unit(path: &Path) -> anyhow::Result<Unit> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read current snapshot {}", path.display()))?;
    parse_unit(&raw).with_context(|| format!("Failed to parse current snapshot {}", path.display()))
}

pub fn load_proposed(path: &Path) -> anyhow::Result<ProposedUpdate> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read proposed update {}", path.display()))?;
    parse_proposed_update(&raw)
        .with_context(|| format!("Failed to parse proposed update {}", path.display()))
}

/// Validate the proposed update at `proposed_path` against the snapshot at
/// `current_path`.
///
/// `now` is only used to stamp the audit record when an actor is configured.
pub fn run_check(
    config: &CheckConfig,
    current_path: &Path,
    proposed_path: &Path,
    now: Timestamp,
) -> anyhow::Result<CheckOutcome> {
    let current = load_unit(current_path)?;
    let proposed = load_proposed(proposed_path)?;

    tracing::debug!(
        unit_id = %current.id,
        from = %current.status,
        to = %proposed.unit.status,
        "Validating unit update",
    );

    let result = validate_unit_update(&current, &proposed);

    if result.ok {
        tracing::info!(unit_id = %current.id, status = %proposed.unit.status, "Unit update accepted");
    } else {
        tracing::warn!(
            unit_id = %current.id,
            error_count = result.errors.len(),
            needs_approval_only = result.needs_approval_only(),
            "Unit update rejected",
        );
        for error in &result.errors {
            tracing::debug!(code = error.code(), field = error.field(), "{error}");
        }
    }

    let output = match &config.actor {
        Some(actor) => {
            let record = AuditRecord::new(actor, now, current, proposed, result.clone());
            render(&record, config.pretty)?
        }
        None => render(&result, config.pretty)?,
    };

    Ok(CheckOutcome { result, output })
}

fn render<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("Failed to serialize check output")
}
