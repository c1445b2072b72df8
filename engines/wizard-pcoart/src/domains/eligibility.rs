use std::collections::HashSet;

use pcoart_types::Address;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_ALLOWLIST_ADDRESSES;
use crate::errors::WizardError;

/// Who may bid in the token's auctions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EligibilityConfig {
    #[serde(default)]
    pub owner: Option<Address>,
    /// When set, any address may bid and `addresses` is ignored.
    pub allow_any: bool,
    #[serde(default)]
    pub addresses: Vec<Address>,
}

impl EligibilityConfig {
    pub(crate) fn validate(&self) -> Result<(), WizardError> {
        if self.allow_any {
            return Ok(());
        }
        if self.addresses.is_empty() {
            return Err(WizardError::validation(
                "addresses",
                "at least one allowed address is required",
            ));
        }
        if self.addresses.len() > MAX_ALLOWLIST_ADDRESSES {
            return Err(WizardError::validation(
                "addresses",
                format!("at most {MAX_ALLOWLIST_ADDRESSES} addresses"),
            ));
        }
        let mut seen = HashSet::new();
        for address in &self.addresses {
            if !seen.insert(*address) {
                return Err(WizardError::validation(
                    "addresses",
                    format!("duplicate address {address}"),
                ));
            }
        }
        Ok(())
    }
}
