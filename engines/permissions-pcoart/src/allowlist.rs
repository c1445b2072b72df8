use std::collections::HashSet;

use pcoart_types::Address;
use serde::{Deserialize, Serialize};

use crate::errors::ReconcileError;
use crate::events;
use crate::ledger::PermissionLedger;

/// One unified allowlist edit, applied as a single batch write. Combined
/// add+remove edits stay one operation rather than two calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowlistUpdate {
    /// Present only when the open/restricted flag itself changed.
    pub allow_any: Option<bool>,
    pub add: Vec<Address>,
    pub remove: Vec<Address>,
}

impl AllowlistUpdate {
    pub fn is_empty(&self) -> bool {
        self.allow_any.is_none() && self.add.is_empty() && self.remove.is_empty()
    }
}

/// Diff a deployed token's allowlist against the user's edit. Adds keep the
/// desired order, removes keep the current order.
pub fn diff_allowlist(
    current_allow_any: bool,
    current: &[Address],
    desired_allow_any: bool,
    desired: &[Address],
) -> AllowlistUpdate {
    let current_set: HashSet<Address> = current.iter().copied().collect();
    let desired_set: HashSet<Address> = desired.iter().copied().collect();
    AllowlistUpdate {
        allow_any: (current_allow_any != desired_allow_any).then_some(desired_allow_any),
        add: desired
            .iter()
            .copied()
            .filter(|a| !current_set.contains(a))
            .collect(),
        remove: current
            .iter()
            .copied()
            .filter(|a| !desired_set.contains(a))
            .collect(),
    }
}

/// Submit a non-empty allowlist update and await its confirmation.
pub async fn apply_allowlist_update<L: PermissionLedger>(
    ledger: &L,
    token: Address,
    update: &AllowlistUpdate,
) -> Result<(), ReconcileError> {
    if update.is_empty() {
        return Ok(());
    }
    ledger
        .update_allowlist(token, update)
        .await
        .map_err(|e| ReconcileError::Ledger(e.to_string()))?;
    events::emit_allowlist_updated(&token, update.add.len(), update.remove.len());
    Ok(())
}
