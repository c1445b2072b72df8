//! Permission reconciliation engine for deployed PCO art tokens.
//!
//! Compares the current on-chain role and ownership assignments against a
//! user-edited desired set, emits the minimal order-sensitive operation list,
//! and executes it one confirmed write at a time. A failure mid-sequence
//! retains the unexecuted suffix so a retry never resubmits confirmed work.

mod allowlist;
mod diff;
mod errors;
mod events;
mod executor;
mod ledger;
mod ops;
mod snapshot;

#[cfg(test)]
mod tests;

pub use allowlist::{AllowlistUpdate, apply_allowlist_update, diff_allowlist};
pub use diff::diff_permissions;
pub use errors::ReconcileError;
pub use executor::Reconciler;
pub use ledger::{AuctionStatus, LedgerError, PermissionLedger};
pub use ops::Operation;
pub use snapshot::{
    CAPABILITY_ORDER, Capability, PermissionSnapshot, RoleAssignments, RoleId, RoleTable,
};
