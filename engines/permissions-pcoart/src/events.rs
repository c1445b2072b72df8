//! Structured progress events for the embedding host's log stream.

use pcoart_types::Address;
use tracing::{info, warn};

use crate::ops::Operation;

pub(crate) fn emit_plan_computed(token: &Address, operation_count: usize) {
    info!(%token, operation_count, "reconcile plan computed");
}

pub(crate) fn emit_operation_confirmed(
    token: &Address,
    op: &Operation,
    completed: usize,
    total: usize,
) {
    info!(%token, %op, completed, total, "operation confirmed");
}

pub(crate) fn emit_reconcile_complete(token: &Address) {
    info!(%token, "reconcile complete");
}

pub(crate) fn emit_reconcile_failed(
    token: &Address,
    completed: usize,
    remaining: usize,
    reason: &str,
) {
    warn!(%token, completed, remaining, reason, "reconcile failed");
}

pub(crate) fn emit_ownership_accepted(token: &Address, nominee: &Address) {
    info!(%token, %nominee, "ownership accepted");
}

pub(crate) fn emit_allowlist_updated(token: &Address, added: usize, removed: usize) {
    info!(%token, added, removed, "allowlist updated");
}
