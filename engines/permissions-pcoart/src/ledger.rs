//! Interface to the chain collaborator (wallet/provider/contract layer).

use std::future::Future;

use pcoart_types::Address;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::allowlist::AllowlistUpdate;
use crate::ops::Operation;
use crate::snapshot::PermissionSnapshot;

/// Collaborator-side failure. Converted to [`crate::ReconcileError`] at the
/// call site; never surfaced raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    Unavailable(String),
    Rejected(String),
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "ledger unavailable: {msg}"),
            Self::Rejected(msg) => write!(f, "rejected: {msg}"),
        }
    }
}

impl std::error::Error for LedgerError {}

/// Live auction state for one token, as read from the chain.
/// A zero `highest_bidder` means no bid has been placed this round.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AuctionStatus {
    pub current_round: u64,
    pub highest_bid: U256,
    pub highest_bidder: Address,
    pub start_time: u64,
    pub end_time: u64,
}

/// Chain access used by the reconciliation engine. Reads are side-effect-free
/// and may be issued freely; writes must confirm before the caller issues the
/// next one.
pub trait PermissionLedger {
    fn read_snapshot(
        &self,
        token: Address,
    ) -> impl Future<Output = Result<PermissionSnapshot, LedgerError>> + Send;

    fn read_auction(
        &self,
        token: Address,
        token_id: u64,
    ) -> impl Future<Output = Result<AuctionStatus, LedgerError>> + Send;

    /// Submit one write and resolve once it is confirmed on chain.
    fn submit_operation(
        &self,
        token: Address,
        op: &Operation,
    ) -> impl Future<Output = Result<(), LedgerError>> + Send;

    /// Apply an allowlist edit as a single batch write.
    fn update_allowlist(
        &self,
        token: Address,
        update: &AllowlistUpdate,
    ) -> impl Future<Output = Result<(), LedgerError>> + Send;
}
