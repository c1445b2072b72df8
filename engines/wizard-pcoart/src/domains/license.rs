use pcoart_types::Address;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_NAME_LEN, MAX_SYMBOL_LEN};
use crate::errors::WizardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MintType {
    /// Mint a fresh license collection.
    New,
    /// Wrap an existing token into a stewardship license.
    Existing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StewardLicenseConfig {
    pub mint_type: MintType,
    pub name: String,
    pub symbol: String,
    pub media_uri: String,
    pub max_token_count: u64,
    pub should_mint: bool,
    /// Filled by the permissions cascade: the token admin mints.
    #[serde(default)]
    pub minter: Option<Address>,
}

impl StewardLicenseConfig {
    pub(crate) fn validate(&self) -> Result<(), WizardError> {
        if self.name.trim().is_empty() {
            return Err(WizardError::validation("name", "name is required"));
        }
        if self.name.len() > MAX_NAME_LEN {
            return Err(WizardError::validation(
                "name",
                format!("at most {MAX_NAME_LEN} characters"),
            ));
        }
        if self.symbol.trim().is_empty() {
            return Err(WizardError::validation("symbol", "symbol is required"));
        }
        if self.symbol.len() > MAX_SYMBOL_LEN {
            return Err(WizardError::validation(
                "symbol",
                format!("at most {MAX_SYMBOL_LEN} characters"),
            ));
        }
        if self.media_uri.trim().is_empty() {
            return Err(WizardError::validation("media_uri", "media URI is required"));
        }
        if self.max_token_count == 0 {
            return Err(WizardError::validation(
                "max_token_count",
                "must mint at least one token",
            ));
        }
        Ok(())
    }
}
