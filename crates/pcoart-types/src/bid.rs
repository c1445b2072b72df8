use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::amount::parse_native;

/// Auction-side inputs to the bid predicate, as read from the chain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuctionBidContext {
    pub starting_bid: U256,
    pub min_bid_increment: U256,
    pub highest_bid: U256,
    pub highest_bidder: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BidValidity {
    Valid(U256),
    Unparseable,
    BelowMinimum { minimum: U256 },
    IncrementTooSmall { required: U256 },
}

/// Assess a candidate bid string against the auction's minimums.
///
/// Invalid when the text is not a non-negative native-unit decimal, when the
/// amount is below the starting bid, or when a strictly-positive highest bid
/// exists and the amount does not clear it by at least the minimum increment.
pub fn assess_bid(ctx: &AuctionBidContext, candidate: &str) -> BidValidity {
    let amount = match parse_native(candidate) {
        Ok(amount) => amount,
        Err(_) => return BidValidity::Unparseable,
    };
    if amount < ctx.starting_bid {
        return BidValidity::BelowMinimum { minimum: ctx.starting_bid };
    }
    if !ctx.highest_bid.is_zero() {
        let required = ctx.highest_bid.saturating_add(ctx.min_bid_increment);
        if amount < required {
            return BidValidity::IncrementTooSmall { required };
        }
    }
    BidValidity::Valid(amount)
}

/// Informational standing of a bidder relative to the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidderStanding {
    None,
    TopBidder,
    Outbid,
}

pub fn bidder_standing(
    ctx: &AuctionBidContext,
    bidder: Address,
    bidder_bid: U256,
) -> BidderStanding {
    if !ctx.highest_bid.is_zero()
        && bidder_bid == ctx.highest_bid
        && ctx.highest_bidder == Some(bidder)
    {
        return BidderStanding::TopBidder;
    }
    if !bidder_bid.is_zero() && bidder_bid < ctx.highest_bid {
        return BidderStanding::Outbid;
    }
    BidderStanding::None
}

/// Periodic honorarium owed on a bid: `bid * fee_numerator / fee_denominator`.
/// `None` when the denominator is zero or the product overflows.
pub fn honorarium(bid: U256, fee_numerator: U256, fee_denominator: U256) -> Option<U256> {
    if fee_denominator.is_zero() {
        return None;
    }
    bid.checked_mul(fee_numerator).map(|v| v / fee_denominator)
}
