use pcoart_types::Address;
use serde::{Deserialize, Serialize};

/// Opaque role identifier. Supplied by the contract collaborator's lookup
/// table; never derived locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleId([u8; 32]);

impl RoleId {
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        RoleId(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x")?;
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Token capabilities with their own component role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    PcoParams,
    Auction,
    Allowlist,
    Beneficiary,
    AddTokenToCollection,
}

/// Fixed diff processing order; keeps emitted operation lists reproducible.
pub const CAPABILITY_ORDER: [Capability; 5] = [
    Capability::PcoParams,
    Capability::Auction,
    Capability::Allowlist,
    Capability::Beneficiary,
    Capability::AddTokenToCollection,
];

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::PcoParams => "pco-params",
            Self::Auction => "auction",
            Self::Allowlist => "allowlist",
            Self::Beneficiary => "beneficiary",
            Self::AddTokenToCollection => "add-token-to-collection",
        };
        f.write_str(label)
    }
}

/// The collaborator-supplied role constants for one token contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTable {
    pub admin: RoleId,
    pub pco_params: RoleId,
    pub auction: RoleId,
    pub allowlist: RoleId,
    pub beneficiary: RoleId,
    pub add_token_to_collection: RoleId,
}

impl RoleTable {
    pub fn role(&self, capability: Capability) -> RoleId {
        match capability {
            Capability::PcoParams => self.pco_params,
            Capability::Auction => self.auction,
            Capability::Allowlist => self.allowlist,
            Capability::Beneficiary => self.beneficiary,
            Capability::AddTokenToCollection => self.add_token_to_collection,
        }
    }
}

/// One full set of role holders; also the shape of a desired edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignments {
    pub owner: Address,
    pub role_admin: Address,
    pub pco_params: Address,
    pub auction: Address,
    pub allowlist: Address,
    pub beneficiary: Address,
    pub add_token_to_collection: Address,
}

impl RoleAssignments {
    pub fn holder(&self, capability: Capability) -> Address {
        match capability {
            Capability::PcoParams => self.pco_params,
            Capability::Auction => self.auction,
            Capability::Allowlist => self.allowlist,
            Capability::Beneficiary => self.beneficiary,
            Capability::AddTokenToCollection => self.add_token_to_collection,
        }
    }
}

/// Current on-chain state for one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSnapshot {
    pub assignments: RoleAssignments,
    /// `Address::ZERO` when no ownership transfer is pending.
    pub nominee_owner: Address,
}

impl PermissionSnapshot {
    pub fn transfer_pending(&self) -> bool {
        !self.nominee_owner.is_zero()
    }

    /// The owner a desired edit compares against: the pending nominee while a
    /// transfer is in flight, else the recorded owner.
    pub fn effective_owner(&self) -> Address {
        if self.transfer_pending() {
            self.nominee_owner
        } else {
            self.assignments.owner
        }
    }
}
