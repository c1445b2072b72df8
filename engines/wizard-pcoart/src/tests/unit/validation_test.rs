use pcoart_types::Address;

use crate::tests::test_utils::*;
use crate::*;

fn field_of(err: WizardError) -> &'static str {
    match err {
        WizardError::Validation { field, .. } => field,
        other => panic!("expected validation error, got {other:?}"),
    }
}

// --- art license ---

#[test]
fn license_requires_name_symbol_and_media() {
    let mut c = license();
    c.name = "  ".into();
    assert_eq!(field_of(c.validate().unwrap_err()), "name");

    let mut c = license();
    c.symbol.clear();
    assert_eq!(field_of(c.validate().unwrap_err()), "symbol");

    let mut c = license();
    c.media_uri.clear();
    assert_eq!(field_of(c.validate().unwrap_err()), "media_uri");
}

#[test]
fn license_caps_name_and_symbol_length() {
    let mut c = license();
    c.name = "x".repeat(MAX_NAME_LEN + 1);
    assert_eq!(field_of(c.validate().unwrap_err()), "name");

    let mut c = license();
    c.symbol = "y".repeat(MAX_SYMBOL_LEN + 1);
    assert_eq!(field_of(c.validate().unwrap_err()), "symbol");
}

#[test]
fn license_requires_at_least_one_token() {
    let mut c = license();
    c.max_token_count = 0;
    assert_eq!(field_of(c.validate().unwrap_err()), "max_token_count");
}

// --- pco settings ---

#[test]
fn pco_rejects_zero_cycle() {
    let mut c = pco();
    c.cycle_value = 0;
    assert_eq!(field_of(c.validate().unwrap_err()), "cycle_value");
}

#[test]
fn pco_rejects_out_of_range_rate() {
    for bad in [-0.5, 100.01, f64::NAN, f64::INFINITY] {
        let mut c = pco();
        c.rate_percent = bad;
        assert_eq!(field_of(c.validate().unwrap_err()), "rate_percent");
    }
}

// --- creator circle ---

#[test]
fn circle_requires_recipients() {
    let mut c = circle();
    c.allocations.clear();
    assert_eq!(field_of(c.validate().unwrap_err()), "allocations");
}

#[test]
fn circle_rejects_duplicate_recipients() {
    let mut c = circle();
    let dup = c.allocations[0];
    c = c.with_recipient(dup);
    assert_eq!(field_of(c.validate().unwrap_err()), "allocations");
}

#[test]
fn circle_rejects_all_zero_units() {
    let mut c = circle();
    for entry in &mut c.allocations {
        entry.units = 0;
    }
    assert_eq!(field_of(c.validate().unwrap_err()), "allocations");
}

// --- auction ---

#[test]
fn auction_requires_start_and_duration() {
    let mut c = auction();
    c.initial_start = 0;
    assert_eq!(field_of(c.validate().unwrap_err()), "initial_start");

    let mut c = auction();
    c.duration_value = 0;
    assert_eq!(field_of(c.validate().unwrap_err()), "duration_value");
}

#[test]
fn auction_rejects_unparseable_amounts() {
    let mut c = auction();
    c.starting_bid = "one ether".into();
    assert_eq!(field_of(c.validate().unwrap_err()), "starting_bid");

    let mut c = auction();
    c.min_bid_increment = "-0.1".into();
    assert_eq!(field_of(c.validate().unwrap_err()), "min_bid_increment");
}

#[test]
fn auction_rejects_zero_increment() {
    let mut c = auction();
    c.min_bid_increment = "0".into();
    assert_eq!(field_of(c.validate().unwrap_err()), "min_bid_increment");
}

// --- eligibility ---

#[test]
fn eligibility_allow_any_needs_no_addresses() {
    let c = EligibilityConfig { owner: None, allow_any: true, addresses: vec![] };
    assert!(c.validate().is_ok());
}

#[test]
fn eligibility_requires_addresses_when_restricted() {
    let c = EligibilityConfig { owner: None, allow_any: false, addresses: vec![] };
    assert_eq!(field_of(c.validate().unwrap_err()), "addresses");
}

#[test]
fn eligibility_rejects_duplicates() {
    let c = EligibilityConfig {
        owner: None,
        allow_any: false,
        addresses: vec![addr(0xB1), addr(0xB1)],
    };
    assert_eq!(field_of(c.validate().unwrap_err()), "addresses");
}

// --- permissions ---

#[test]
fn permissions_rejects_zero_admins() {
    let mut c = permissions();
    c.token_admin = Address::ZERO;
    assert_eq!(field_of(c.validate().unwrap_err()), "token_admin");

    let mut c = permissions();
    c.role_admin = Address::ZERO;
    assert_eq!(field_of(c.validate().unwrap_err()), "role_admin");
}
