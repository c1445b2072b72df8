use pcoart_types::Address;

use crate::ops::Operation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    /// The chain moved between snapshot read and write; re-read and re-diff.
    StaleSnapshot { expected: Address, found: Address },
    /// A write was rejected before anything in this run had confirmed.
    OperationRejected { op: Operation, reason: String },
    /// The sequence aborted after `confirmed` writes; the unexecuted suffix
    /// is retained for retry.
    PartialCompletion { confirmed: usize, remaining: usize, reason: String },
    InvalidState(String),
    /// A snapshot or auction read failed.
    Ledger(String),
}

impl std::fmt::Display for ReconcileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StaleSnapshot { expected, found } => write!(
                f,
                "Snapshot is stale: expected owner {expected}, chain reports {found}"
            ),
            Self::OperationRejected { op, reason } => {
                write!(f, "Operation {op} rejected: {reason}")
            }
            Self::PartialCompletion { confirmed, remaining, reason } => write!(
                f,
                "Aborted after {confirmed} confirmed operations ({remaining} remaining): {reason}"
            ),
            Self::InvalidState(msg) => write!(f, "Invalid state: {msg}"),
            Self::Ledger(msg) => write!(f, "Ledger read failed: {msg}"),
        }
    }
}

impl std::error::Error for ReconcileError {}
