use pcoart_types::Address;
use serde::{Deserialize, Serialize};

use crate::errors::WizardError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PermissionsConfig {
    /// Receives the minter role on the license facet.
    pub token_admin: Address,
    /// Administers component roles; also the default component owner for any
    /// domain whose owner was left unset.
    pub role_admin: Address,
}

impl PermissionsConfig {
    pub(crate) fn validate(&self) -> Result<(), WizardError> {
        if self.token_admin.is_zero() {
            return Err(WizardError::validation(
                "token_admin",
                "token admin is required",
            ));
        }
        if self.role_admin.is_zero() {
            return Err(WizardError::validation(
                "role_admin",
                "role admin is required",
            ));
        }
        Ok(())
    }
}
