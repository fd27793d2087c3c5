// ═══════════════════════════════════════════════════════════════════════
// Bid negotiation — rotating auction over the seats still bidding
// ═══════════════════════════════════════════════════════════════════════

use crate::error::RuleViolation;
use crate::types::*;
use tracing::{info, trace};

/// What a bid or pass did to the auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidOutcome {
    /// Auction continues with `next` on turn.
    Continue { next: SeatId },
    /// Only one seat remains; `winner` names trump at `bid`.
    Closed { winner: SeatId, bid: u16 },
}

/// Smallest value the current seat may bid. Always above the current
/// bid, even under a zero step.
pub fn minimum_bid(state: &RoundState) -> u16 {
    state.current_bid.saturating_add(state.bid_rules.step.max(1))
}

/// Validate a numeric bid (non-zero) for `seat`. Turn and phase are the
/// engine's concern.
pub fn check_bid(state: &RoundState, seat: SeatId, value: u16) -> Result<(), RuleViolation> {
    let rules = state.bid_rules;
    if !state.is_active_bidder(seat) {
        return Err(RuleViolation::InactiveBidder(seat));
    }
    let minimum = minimum_bid(state);
    if value < minimum || value <= state.current_bid {
        return Err(RuleViolation::BidTooLow { value, minimum });
    }
    if value > rules.ceiling {
        return Err(RuleViolation::BidAboveCeiling { value, ceiling: rules.ceiling });
    }
    if rules.step > 0 && (value - rules.floor) % rules.step != 0 {
        return Err(RuleViolation::BidOffStep { value, floor: rules.floor, step: rules.step });
    }
    Ok(())
}

/// Every bid value the seat on turn may offer, lowest first. Empty when
/// the auction is over or the ceiling has been reached.
pub fn legal_bids(state: &RoundState) -> Vec<u16> {
    if state.phase != Phase::Bidding || !state.is_active_bidder(state.current_seat) {
        return Vec::new();
    }
    let rules = state.bid_rules;
    (minimum_bid(state)..=rules.ceiling)
        .step_by(rules.step.max(1) as usize)
        .collect()
}

/// Next seat after `from` that has not passed, wrapping around.
pub fn next_active_seat(state: &RoundState, from: SeatId) -> SeatId {
    let mut seat = from.next();
    for _ in 0..NUM_SEATS {
        if state.is_active_bidder(seat) {
            return seat;
        }
        seat = seat.next();
    }
    from
}

/// Record an accepted bid. `value` must already have passed `check_bid`.
pub fn apply_bid(state: &mut RoundState, seat: SeatId, value: u16) -> BidOutcome {
    state.current_bid = value;
    state.bid_winner = Some(seat);
    state.bids[seat.index()] = BidRecord::Bid(value);
    let next = next_active_seat(state, seat);
    state.current_seat = next;
    trace!(%seat, value, %next, "bid accepted");
    BidOutcome::Continue { next }
}

/// Remove `seat` from the auction. Closes the auction once a single seat
/// remains: the last seat to bid wins, or the survivor at the floor if
/// nobody bid.
pub fn apply_pass(state: &mut RoundState, seat: SeatId) -> BidOutcome {
    state.pass_count += 1;
    state.bids[seat.index()] = BidRecord::Passed;
    state.active_seats.retain(|&s| s != seat);

    let next = next_active_seat(state, seat);
    state.current_seat = next;
    trace!(%seat, %next, passes = state.pass_count, "pass");

    if state.active_seats.len() > 1 {
        return BidOutcome::Continue { next };
    }

    let winner = state.bid_winner.unwrap_or(next);
    state.bid_winner = Some(winner);
    state.current_seat = winner;
    info!(%winner, bid = state.current_bid, "bidding closed");
    BidOutcome::Closed { winner, bid: state.current_bid }
}
