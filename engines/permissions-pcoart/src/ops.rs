use pcoart_types::Address;
use serde::{Deserialize, Serialize};

use crate::snapshot::RoleId;

/// One ledger write. Submitted strictly sequentially; every call must
/// confirm before the next is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    TransferOwnership { new_owner: Address },
    AcceptOwnership,
    GrantRole { role: RoleId, account: Address },
    RevokeRole { role: RoleId, account: Address },
    RenounceRole { role: RoleId },
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TransferOwnership { new_owner } => {
                write!(f, "transfer_ownership({new_owner})")
            }
            Self::AcceptOwnership => write!(f, "accept_ownership()"),
            Self::GrantRole { role, account } => write!(f, "grant_role({role}, {account})"),
            Self::RevokeRole { role, account } => write!(f, "revoke_role({role}, {account})"),
            Self::RenounceRole { role } => write!(f, "renounce_role({role})"),
        }
    }
}
