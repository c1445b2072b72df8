//! Interface to the deployment collaborator (wallet/provider/diamond layer).

use std::future::Future;

use pcoart_types::Address;

use crate::finalize::FacetInit;

/// Collaborator-side deployment failure (rejected signature, reverted
/// transaction, unreachable provider). Always converted to
/// [`crate::WizardError::DeploymentRejected`] at the call site.
#[derive(Debug, Clone)]
pub struct DeployError(pub String);

impl std::fmt::Display for DeployError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for DeployError {}

/// Atomic multi-facet deployment. The collaborator encodes selectors and
/// facet addresses; the core only supplies semantic field values.
pub trait FacetDeployer {
    /// Install and initialize the ordered facet batch in one deployment,
    /// resolving to the deployed token address once confirmed.
    fn deploy_with_facets(
        &self,
        inits: &[FacetInit],
    ) -> impl Future<Output = Result<Address, DeployError>> + Send;
}
