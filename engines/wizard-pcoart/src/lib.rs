//! Wizard state accumulator for configuring a PCO art stewardship token.
//!
//! A strictly linear seven-step flow accumulates six sub-configurations into
//! a single [`WizardState`] value. Step transitions are value-to-value
//! functions: each submit validates its input, merges it, and returns a new
//! wizard; nothing external happens until [`Wizard::submit`] hands the
//! assembled facet batch to the deployment collaborator.

mod cascade;
mod constants;
mod domains;
mod errors;
mod events;
mod external;
mod finalize;
mod state;


pub use constants::*;
pub use domains::{
    AllocationEntry, AuctionConfig, CreatorCircleConfig, EligibilityConfig, MintType,
    PcoSettingsConfig, PermissionsConfig, StewardLicenseConfig, honorarium_preview,
};
pub use errors::WizardError;
pub use external::{DeployError, FacetDeployer};
pub use finalize::{
    AllowlistInit, AuctionInit, BeneficiaryInit, ComponentOwners, FacetInit, PcoSettingsInit,
    PermissionsInit, StewardLicenseInit,
};
pub use state::{StepInput, Wizard, WizardState, WizardStep};
