// =============================================================================
// Wizard Flow Integration Tests
// =============================================================================
// Drives the full seven-step configuration flow end to end: accumulate the
// six domains, finalize into the ordered facet batch, and hand it to the
// deployment collaborator in a single call.

use anyhow::Result;
use pcoart_types::TimeUnit;
use wizard_pcoart::{
    AllocationEntry, AuctionConfig, CreatorCircleConfig, EligibilityConfig, MintType,
    PcoSettingsConfig, PermissionsConfig, StepInput, StewardLicenseConfig, Wizard, WizardError,
    WizardStep,
};

use crate::utils::{MockDeployer, addr, init_tracing};

fn license() -> StewardLicenseConfig {
    StewardLicenseConfig {
        mint_type: MintType::New,
        name: "Gilded Meadow".into(),
        symbol: "GMW".into(),
        media_uri: "ipfs://bafybeigdyrzt5example/meta.json".into(),
        max_token_count: 3,
        should_mint: true,
        minter: None,
    }
}

fn configured() -> Wizard {
    Wizard::new()
        .advance(StepInput::ArtLicense(license()))
        .unwrap()
        .advance(StepInput::PcoSettings(PcoSettingsConfig {
            owner: None,
            cycle_value: 1,
            cycle_unit: TimeUnit::Years,
            rate_percent: 10.0,
        }))
        .unwrap()
        .advance(StepInput::CreatorCircle(CreatorCircleConfig {
            owner: None,
            token: None,
            allocations: vec![
                AllocationEntry { subscriber: addr(0xA1), units: 60 },
                AllocationEntry { subscriber: addr(0xA2), units: 40 },
            ],
        }))
        .unwrap()
        .advance(StepInput::Auction(AuctionConfig {
            owner: None,
            initial_start: 1_700_000_000,
            start_offset_value: 1,
            start_offset_unit: TimeUnit::Days,
            duration_value: 24,
            duration_unit: TimeUnit::Hours,
            starting_bid: "1.0".into(),
            min_bid_increment: "0.1".into(),
            extension_window_minutes: 15,
            extension_length_minutes: 15,
        }))
        .unwrap()
        .advance(StepInput::Eligibility(EligibilityConfig {
            owner: None,
            allow_any: false,
            addresses: vec![addr(0xB1), addr(0xB2)],
        }))
        .unwrap()
        .advance(StepInput::Permissions(PermissionsConfig {
            token_admin: addr(0x11),
            role_admin: addr(0x22),
        }))
        .unwrap()
}

#[tokio::test]
async fn full_flow_deploys_ordered_batch() -> Result<()> {
    init_tracing();
    let wizard = configured();
    assert_eq!(wizard.step(), WizardStep::Review);

    let deployer = MockDeployer::new();
    let deployed = wizard.submit(&deployer).await?;
    assert_eq!(deployed, deployer.address);

    let batches = deployer.deployed.lock().unwrap();
    assert_eq!(batches.len(), 1, "exactly one atomic deployment call");
    let names: Vec<&str> = batches[0].iter().map(|f| f.facet_name()).collect();
    assert_eq!(
        names,
        vec![
            "steward_license",
            "allowlist",
            "auction",
            "beneficiary",
            "pco_settings",
            "permissions"
        ]
    );
    Ok(())
}

#[tokio::test]
async fn batch_serializes_with_facet_tags() -> Result<()> {
    let batch = configured().finalize()?;
    let json = serde_json::to_value(&batch)?;
    assert_eq!(json[0]["facet"], "steward_license");
    assert_eq!(json[0]["minter"], "0x1111111111111111111111111111111111111111");
    assert_eq!(json[2]["facet"], "auction");
    assert_eq!(json[2]["duration_seconds"], 86_400);
    Ok(())
}

#[tokio::test]
async fn deployment_failure_is_converted_and_retriable() {
    let wizard = configured();
    let deployer = MockDeployer::new();
    deployer.fail_next();

    let err = wizard.submit(&deployer).await.unwrap_err();
    assert!(matches!(err, WizardError::DeploymentRejected(_)));
    assert!(deployer.deployed.lock().unwrap().is_empty());

    // The wizard value is untouched; a second submit succeeds.
    let deployed = wizard.submit(&deployer).await.unwrap();
    assert_eq!(deployed, deployer.address);
}

#[tokio::test]
async fn abandoning_the_wizard_has_no_external_effect() {
    let deployer = MockDeployer::new();
    {
        let wizard = configured();
        // Walked away before submit.
        drop(wizard);
    }
    assert!(deployer.deployed.lock().unwrap().is_empty());
}

#[tokio::test]
async fn incomplete_configuration_never_reaches_the_deployer() {
    let deployer = MockDeployer::new();
    let err = Wizard::new().submit(&deployer).await.unwrap_err();
    assert!(matches!(err, WizardError::IncompleteConfiguration(_)));
    assert!(deployer.deployed.lock().unwrap().is_empty());
}
