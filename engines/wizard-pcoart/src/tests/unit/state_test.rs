use crate::tests::test_utils::*;
use crate::*;

fn state_json(wizard: &Wizard) -> serde_json::Value {
    serde_json::to_value(wizard.state()).unwrap()
}

#[test]
fn fresh_wizard_starts_on_art_license() {
    let w = Wizard::new();
    assert_eq!(w.step(), WizardStep::ArtLicense);
    assert!(w.state().steward_license.is_none());
}

#[test]
fn full_flow_reaches_review() {
    let w = configured_wizard();
    assert_eq!(w.step(), WizardStep::Review);
    assert!(w.state().steward_license.is_some());
    assert!(w.state().pco_settings.is_some());
    assert!(w.state().creator_circle.is_some());
    assert!(w.state().auction.is_some());
    assert!(w.state().eligibility.is_some());
    assert!(w.state().permissions.is_some());
}

#[test]
fn advance_rejects_out_of_order_input() {
    let w = Wizard::new();
    let err = w.advance(StepInput::Auction(auction())).unwrap_err();
    assert!(matches!(err, WizardError::InvalidTransition(_)));
    // The original value is untouched and still usable.
    assert_eq!(w.step(), WizardStep::ArtLicense);
    assert!(w.advance(StepInput::ArtLicense(license())).is_ok());
}

#[test]
fn advance_validation_failure_leaves_state_alone() {
    let w = Wizard::new();
    let mut bad = license();
    bad.name.clear();
    let err = w.advance(StepInput::ArtLicense(bad)).unwrap_err();
    assert!(matches!(err, WizardError::Validation { field: "name", .. }));
    assert_eq!(w.step(), WizardStep::ArtLicense);
    assert!(w.state().steward_license.is_none());
}

#[test]
fn retreat_then_advance_with_same_input_is_idempotent() {
    let w = Wizard::new()
        .advance(StepInput::ArtLicense(license()))
        .unwrap()
        .advance(StepInput::PcoSettings(pco()))
        .unwrap();
    let before = state_json(&w);

    let back = w.retreat();
    assert_eq!(back.step(), WizardStep::PcoSettings);
    assert_eq!(state_json(&back), before);

    let again = back.advance(StepInput::PcoSettings(pco())).unwrap();
    assert_eq!(again.step(), WizardStep::CreatorCircle);
    assert_eq!(state_json(&again), before);
}

#[test]
fn retreat_is_noop_on_first_step() {
    let w = Wizard::new();
    assert_eq!(w.retreat().step(), WizardStep::ArtLicense);
}

#[test]
fn skip_only_allowed_on_optional_steps() {
    let w = Wizard::new();
    let err = w.skip().unwrap_err();
    assert!(matches!(err, WizardError::InvalidTransition(_)));

    let at_circle = Wizard::new()
        .advance(StepInput::ArtLicense(license()))
        .unwrap()
        .advance(StepInput::PcoSettings(pco()))
        .unwrap();
    let skipped = at_circle.skip().unwrap();
    assert_eq!(skipped.step(), WizardStep::Auction);
    assert!(skipped.state().creator_circle.is_none());
}

#[test]
fn jump_to_requires_review() {
    let w = Wizard::new();
    let err = w.jump_to(WizardStep::Auction).unwrap_err();
    assert!(matches!(err, WizardError::InvalidTransition(_)));
}

#[test]
fn review_edit_returns_to_review() {
    let w = configured_wizard();
    let editing = w.jump_to(WizardStep::PcoSettings).unwrap();
    assert_eq!(editing.step(), WizardStep::PcoSettings);

    let mut updated = pco();
    updated.rate_percent = 5.0;
    let back = editing.advance(StepInput::PcoSettings(updated)).unwrap();
    assert_eq!(back.step(), WizardStep::Review);
    assert_eq!(back.state().pco_settings.as_ref().unwrap().rate_percent, 5.0);
}

#[test]
fn review_edit_failure_stays_on_edited_step() {
    let w = configured_wizard();
    let editing = w.jump_to(WizardStep::PcoSettings).unwrap();
    let mut bad = pco();
    bad.cycle_value = 0;
    assert!(editing.advance(StepInput::PcoSettings(bad)).is_err());
    assert_eq!(editing.step(), WizardStep::PcoSettings);
}
