//! Shared types and pure-logic utilities for the PCO Art core.
//! Zero provider dependency; usable from any frontend host.

mod address;
mod amount;
mod bid;
mod error;
mod time;

pub use address::Address;
pub use amount::{NATIVE_DECIMALS, format_native, parse_native};
pub use bid::{
    AuctionBidContext, BidValidity, BidderStanding, assess_bid, bidder_standing, honorarium,
};
pub use error::{AddressError, AmountError};
pub use time::{
    RemainingTime, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_WEEK,
    SECONDS_PER_YEAR, TimeUnit, from_seconds, remaining_time, to_seconds,
};
