//! Assembly of the ordered facet init batch for atomic deployment.

use pcoart_types::{Address, TimeUnit, to_seconds};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::constants::RATE_DENOMINATOR;
use crate::domains::AllocationEntry;
use crate::errors::WizardError;
use crate::events;
use crate::external::FacetDeployer;
use crate::state::Wizard;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StewardLicenseInit {
    pub minter: Option<Address>,
    pub name: String,
    pub symbol: String,
    pub media_uri: String,
    pub max_token_count: u64,
    pub should_mint: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowlistInit {
    pub owner: Option<Address>,
    pub allow_any: bool,
    pub addresses: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionInit {
    pub owner: Option<Address>,
    pub initial_start: u64,
    pub start_offset_seconds: u64,
    pub duration_seconds: u64,
    pub starting_bid: U256,
    pub min_bid_increment: U256,
    pub extension_window_seconds: u64,
    pub extension_length_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeneficiaryInit {
    pub owner: Option<Address>,
    pub token: Option<Address>,
    pub allocations: Vec<AllocationEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcoSettingsInit {
    pub owner: Option<Address>,
    pub cycle_seconds: u64,
    pub rate_numerator: u64,
    pub rate_denominator: u64,
}

/// Resolved holder for each component role the permissions facet grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentOwners {
    pub pco_settings: Address,
    pub auction: Address,
    pub allowlist: Address,
    pub beneficiary: Address,
    pub add_token_to_collection: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionsInit {
    pub token_admin: Address,
    pub role_admin: Address,
    pub component_owners: ComponentOwners,
}

/// One facet's init payload; semantic fields only. Selector and facet
/// address encoding belongs to the deployment collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "facet", rename_all = "snake_case")]
pub enum FacetInit {
    StewardLicense(StewardLicenseInit),
    Allowlist(AllowlistInit),
    Auction(AuctionInit),
    Beneficiary(BeneficiaryInit),
    PcoSettings(PcoSettingsInit),
    Permissions(PermissionsInit),
}

impl FacetInit {
    pub fn facet_name(&self) -> &'static str {
        match self {
            Self::StewardLicense(_) => "steward_license",
            Self::Allowlist(_) => "allowlist",
            Self::Auction(_) => "auction",
            Self::Beneficiary(_) => "beneficiary",
            Self::PcoSettings(_) => "pco_settings",
            Self::Permissions(_) => "permissions",
        }
    }
}

impl Wizard {
    /// Transform the accumulated configuration into the ordered init batch.
    ///
    /// Installation order is fixed: license, allowlist, auction, beneficiary,
    /// PCO settings, permissions. Domains that were never configured are
    /// omitted without disturbing the order. The license, allowlist, auction,
    /// and PCO settings domains are mandatory.
    pub fn finalize(&self) -> Result<Vec<FacetInit>, WizardError> {
        let state = self.state();

        let mut missing = Vec::new();
        if state.steward_license.is_none() {
            missing.push("art-license");
        }
        if state.eligibility.is_none() {
            missing.push("eligibility");
        }
        if state.auction.is_none() {
            missing.push("auction");
        }
        if state.pco_settings.is_none() {
            missing.push("pco-settings");
        }
        if !missing.is_empty() {
            return Err(WizardError::IncompleteConfiguration(format!(
                "missing required steps: {}",
                missing.join(", ")
            )));
        }

        let mut batch = Vec::with_capacity(6);
        if let Some(license) = &state.steward_license {
            batch.push(FacetInit::StewardLicense(StewardLicenseInit {
                minter: license.minter,
                name: license.name.clone(),
                symbol: license.symbol.clone(),
                media_uri: license.media_uri.clone(),
                max_token_count: license.max_token_count,
                should_mint: license.should_mint,
            }));
        }
        if let Some(eligibility) = &state.eligibility {
            batch.push(FacetInit::Allowlist(AllowlistInit {
                owner: eligibility.owner,
                allow_any: eligibility.allow_any,
                addresses: eligibility.addresses.clone(),
            }));
        }
        if let Some(auction) = &state.auction {
            batch.push(FacetInit::Auction(AuctionInit {
                owner: auction.owner,
                initial_start: auction.initial_start,
                start_offset_seconds: auction.start_offset_seconds(),
                duration_seconds: auction.duration_seconds(),
                starting_bid: auction.starting_bid_wei()?,
                min_bid_increment: auction.min_bid_increment_wei()?,
                extension_window_seconds: to_seconds(
                    auction.extension_window_minutes,
                    TimeUnit::Minutes,
                ),
                extension_length_seconds: to_seconds(
                    auction.extension_length_minutes,
                    TimeUnit::Minutes,
                ),
            }));
        }
        if let Some(circle) = &state.creator_circle {
            batch.push(FacetInit::Beneficiary(BeneficiaryInit {
                owner: circle.owner,
                token: circle.token,
                allocations: circle.allocations.clone(),
            }));
        }
        if let Some(pco) = &state.pco_settings {
            batch.push(FacetInit::PcoSettings(PcoSettingsInit {
                owner: pco.owner,
                cycle_seconds: pco.cycle_seconds(),
                rate_numerator: (pco.rate_percent * 100.0).round() as u64,
                rate_denominator: RATE_DENOMINATOR,
            }));
        }
        if let Some(permissions) = &state.permissions {
            let fallback = permissions.role_admin;
            let resolve = |owner: Option<Address>| owner.unwrap_or(fallback);
            batch.push(FacetInit::Permissions(PermissionsInit {
                token_admin: permissions.token_admin,
                role_admin: permissions.role_admin,
                component_owners: ComponentOwners {
                    pco_settings: resolve(state.pco_settings.as_ref().and_then(|c| c.owner)),
                    auction: resolve(state.auction.as_ref().and_then(|c| c.owner)),
                    allowlist: resolve(state.eligibility.as_ref().and_then(|c| c.owner)),
                    beneficiary: resolve(state.creator_circle.as_ref().and_then(|c| c.owner)),
                    add_token_to_collection: fallback,
                },
            }));
        }

        events::emit_batch_assembled(batch.len());
        Ok(batch)
    }

    /// Finalize and hand the batch to the deployment collaborator in a single
    /// call. Collaborator failures surface as `DeploymentRejected`, never as
    /// raw provider errors.
    pub async fn submit<D: FacetDeployer>(&self, deployer: &D) -> Result<Address, WizardError> {
        let batch = self.finalize()?;
        events::emit_deployment_submitted(batch.len());
        match deployer.deploy_with_facets(&batch).await {
            Ok(token) => {
                events::emit_deployment_confirmed(&token);
                Ok(token)
            }
            Err(e) => {
                events::emit_deployment_rejected(&e.0);
                Err(WizardError::DeploymentRejected(e.0))
            }
        }
    }
}
