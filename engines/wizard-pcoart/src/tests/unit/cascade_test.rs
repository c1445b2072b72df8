use crate::tests::test_utils::*;
use crate::*;

#[test]
fn permissions_submit_sets_license_minter() {
    let w = configured_wizard();
    let license = w.state().steward_license.as_ref().unwrap();
    assert_eq!(license.minter, Some(token_admin()));
}

#[test]
fn role_admin_fills_unset_component_owners() {
    let w = configured_wizard();
    let state = w.state();
    assert_eq!(state.pco_settings.as_ref().unwrap().owner, Some(role_admin()));
    assert_eq!(state.creator_circle.as_ref().unwrap().owner, Some(role_admin()));
    assert_eq!(state.auction.as_ref().unwrap().owner, Some(role_admin()));
    assert_eq!(state.eligibility.as_ref().unwrap().owner, Some(role_admin()));
}

#[test]
fn explicit_owner_survives_cascade() {
    let mut custom = auction();
    custom.owner = Some(addr(0x99));
    let w = Wizard::new()
        .advance(StepInput::ArtLicense(license()))
        .unwrap()
        .advance(StepInput::PcoSettings(pco()))
        .unwrap()
        .advance(StepInput::CreatorCircle(circle()))
        .unwrap()
        .advance(StepInput::Auction(custom))
        .unwrap()
        .advance(StepInput::Eligibility(eligibility()))
        .unwrap()
        .advance(StepInput::Permissions(permissions()))
        .unwrap();
    assert_eq!(w.state().auction.as_ref().unwrap().owner, Some(addr(0x99)));
    // Owners that were left unset still pick up the default.
    assert_eq!(w.state().pco_settings.as_ref().unwrap().owner, Some(role_admin()));
}

#[test]
fn cascade_never_runs_retroactively() {
    let w = configured_wizard();
    // Re-edit an earlier step from review with its owner cleared; the cascade
    // only fires on the permissions submit, so the cleared owner stays unset.
    let edited = w
        .jump_to(WizardStep::PcoSettings)
        .unwrap()
        .advance(StepInput::PcoSettings(pco()))
        .unwrap();
    assert_eq!(edited.step(), WizardStep::Review);
    assert_eq!(edited.state().pco_settings.as_ref().unwrap().owner, None);
}

#[test]
fn cascade_skips_domains_not_yet_configured() {
    // Skip the creator circle entirely; the cascade must not invent one.
    let w = Wizard::new()
        .advance(StepInput::ArtLicense(license()))
        .unwrap()
        .advance(StepInput::PcoSettings(pco()))
        .unwrap()
        .skip()
        .unwrap()
        .advance(StepInput::Auction(auction()))
        .unwrap()
        .advance(StepInput::Eligibility(eligibility()))
        .unwrap()
        .advance(StepInput::Permissions(permissions()))
        .unwrap();
    assert!(w.state().creator_circle.is_none());
}
