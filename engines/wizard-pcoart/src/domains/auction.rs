use pcoart_types::{
    Address, AuctionBidContext, BidValidity, TimeUnit, assess_bid, honorarium, parse_native,
    to_seconds,
};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::errors::WizardError;

/// English-auction parameters. Bid amounts are kept as the user's decimal
/// strings and parsed during validation and payload assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuctionConfig {
    #[serde(default)]
    pub owner: Option<Address>,
    /// Unix seconds of the first auction's start.
    pub initial_start: u64,
    pub start_offset_value: u32,
    pub start_offset_unit: TimeUnit,
    pub duration_value: u32,
    pub duration_unit: TimeUnit,
    pub starting_bid: String,
    pub min_bid_increment: String,
    pub extension_window_minutes: u32,
    pub extension_length_minutes: u32,
}

impl AuctionConfig {
    pub(crate) fn validate(&self) -> Result<(), WizardError> {
        if self.initial_start == 0 {
            return Err(WizardError::validation(
                "initial_start",
                "start date is required",
            ));
        }
        if self.duration_value == 0 {
            return Err(WizardError::validation(
                "duration_value",
                "duration must be at least one unit",
            ));
        }
        self.starting_bid_wei()?;
        if self.min_bid_increment_wei()?.is_zero() {
            return Err(WizardError::validation(
                "min_bid_increment",
                "minimum bid increment must be greater than zero",
            ));
        }
        Ok(())
    }

    pub fn starting_bid_wei(&self) -> Result<U256, WizardError> {
        parse_native(&self.starting_bid)
            .map_err(|e| WizardError::validation("starting_bid", e.to_string()))
    }

    pub fn min_bid_increment_wei(&self) -> Result<U256, WizardError> {
        parse_native(&self.min_bid_increment)
            .map_err(|e| WizardError::validation("min_bid_increment", e.to_string()))
    }

    pub fn start_offset_seconds(&self) -> u64 {
        to_seconds(self.start_offset_value, self.start_offset_unit)
    }

    pub fn duration_seconds(&self) -> u64 {
        to_seconds(self.duration_value, self.duration_unit)
    }
}

/// Review-step honorarium preview: the periodic fee a candidate bid would
/// owe, computed only once the bid clears the auction minimums.
pub fn honorarium_preview(
    ctx: &AuctionBidContext,
    candidate: &str,
    fee_numerator: U256,
    fee_denominator: U256,
) -> Option<U256> {
    match assess_bid(ctx, candidate) {
        BidValidity::Valid(amount) => honorarium(amount, fee_numerator, fee_denominator),
        _ => None,
    }
}
