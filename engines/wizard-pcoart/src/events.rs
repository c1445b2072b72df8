//! Structured progress events for the embedding host's log stream.

use pcoart_types::Address;
use tracing::{info, warn};

use crate::state::WizardStep;

pub(crate) fn emit_step_advanced(from: WizardStep, to: WizardStep) {
    info!(%from, %to, "wizard step advanced");
}

pub(crate) fn emit_step_retreated(from: WizardStep, to: WizardStep) {
    info!(%from, %to, "wizard step retreated");
}

pub(crate) fn emit_review_edit(step: WizardStep) {
    info!(%step, "editing step from review");
}

pub(crate) fn emit_cascade_applied(owners_filled: usize) {
    info!(owners_filled, "permissions cascade applied");
}

pub(crate) fn emit_batch_assembled(facet_count: usize) {
    info!(facet_count, "facet init batch assembled");
}

pub(crate) fn emit_deployment_submitted(facet_count: usize) {
    info!(facet_count, "deployment submitted");
}

pub(crate) fn emit_deployment_confirmed(token: &Address) {
    info!(%token, "deployment confirmed");
}

pub(crate) fn emit_deployment_rejected(reason: &str) {
    warn!(reason, "deployment rejected");
}
