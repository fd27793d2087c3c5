// ═══════════════════════════════════════════════════════════════════════
// Round engine — phase transitions and action resolution
//
// Architecture:
//   The engine is a pure state machine over value snapshots. Every entry
//   point takes `&RoundState` and returns a new `RoundState`; the input
//   is never touched. It never does I/O or calls agents.
//
// Flow:
//   1. `setup::new_round` builds a Dealing snapshot and `advance` deals it
//   2. The seat on turn submits an `Action` via `apply_action`
//   3. Illegal actions (wrong phase, wrong seat, under-bid, illegal card)
//      are ignored: the returned snapshot equals the input
//   4. Repeat until `phase == Finished`
// ═══════════════════════════════════════════════════════════════════════

use crate::bidding::{self, BidOutcome};
use crate::cards;
use crate::error::RuleViolation;
use crate::legality;
use crate::setup;
use crate::trick;
use crate::types::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

/// Everything a seat can do to a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Offer a bid. `0` is a pass.
    Bid(u16),
    Pass,
    SelectTrump(Suit),
    PlayCard(Card),
}

/// Run automatic transitions: deal a `Dealing` round, and name trump for
/// an automated bid-winner. Anything else comes back unchanged.
pub fn advance(state: &RoundState) -> RoundState {
    let mut next = state.clone();
    advance_in_place(&mut next);
    next
}

fn advance_in_place(next: &mut RoundState) {
    match next.phase {
        Phase::Dealing => {
            setup::deal_into(next);
            next.phase = Phase::Bidding;
            next.current_seat = SeatId(0);
            info!(seed = next.seed, "bidding opened");
        }
        Phase::SelectingTrump => {
            let Some(winner) = next.bid_winner else {
                return;
            };
            if !next.seat(winner).automated {
                return;
            }
            let suit = cards::strongest_suit(&next.seat(winner).hand).unwrap_or(Suit::Hearts);
            set_trump(next, suit);
        }
        Phase::Bidding | Phase::Playing | Phase::Finished => {}
    }
}

/// Seat expected to act next, or `None` when no input is awaited.
pub fn acting_seat(state: &RoundState) -> Option<SeatId> {
    match state.phase {
        Phase::Bidding | Phase::SelectingTrump | Phase::Playing => Some(state.current_seat),
        Phase::Dealing | Phase::Finished => None,
    }
}

/// Apply `action` on behalf of `seat`, or say why it is refused.
pub fn try_apply(state: &RoundState, seat: SeatId, action: Action) -> Result<RoundState, RuleViolation> {
    let expected = match action {
        Action::Bid(_) | Action::Pass => Phase::Bidding,
        Action::SelectTrump(_) => Phase::SelectingTrump,
        Action::PlayCard(_) => Phase::Playing,
    };
    if state.phase != expected {
        return Err(RuleViolation::PhaseMismatch { expected, actual: state.phase });
    }
    if seat != state.current_seat {
        return Err(RuleViolation::OutOfTurn { seat, current: state.current_seat });
    }

    let mut next = state.clone();
    match action {
        Action::Bid(0) | Action::Pass => {
            if !state.is_active_bidder(seat) {
                return Err(RuleViolation::InactiveBidder(seat));
            }
            if let BidOutcome::Closed { .. } = bidding::apply_pass(&mut next, seat) {
                next.phase = Phase::SelectingTrump;
                advance_in_place(&mut next);
            }
        }
        Action::Bid(value) => {
            bidding::check_bid(state, seat, value)?;
            bidding::apply_bid(&mut next, seat, value);
        }
        Action::SelectTrump(suit) => {
            set_trump(&mut next, suit);
        }
        Action::PlayCard(card) => {
            legality::check_play(seat, state.hand(seat), state.lead_card(), card)?;
            play(&mut next, seat, card);
        }
    }
    next.revision += 1;
    Ok(next)
}

/// Apply `action` for `seat`. Refused actions are logged and ignored.
pub fn apply_action(state: &RoundState, seat: SeatId, action: Action) -> RoundState {
    match try_apply(state, seat, action) {
        Ok(next) => next,
        Err(reason) => {
            debug!(%seat, phase = %state.phase, ?action, %reason, "action rejected");
            state.clone()
        }
    }
}

// ── Entry points for the seat on turn ──────────────────────────────────

pub fn place_bid(state: &RoundState, value: u16) -> RoundState {
    apply_action(state, state.current_seat, Action::Bid(value))
}

pub fn pass(state: &RoundState) -> RoundState {
    place_bid(state, 0)
}

pub fn select_trump(state: &RoundState, suit: Suit) -> RoundState {
    apply_action(state, state.current_seat, Action::SelectTrump(suit))
}

pub fn play_card(state: &RoundState, card: Card) -> RoundState {
    apply_action(state, state.current_seat, Action::PlayCard(card))
}

/// Final (or running) scores, highest first; ties keep seat order.
pub fn standings(state: &RoundState) -> Vec<(SeatId, u16)> {
    let mut ranked: Vec<(SeatId, u16)> = SeatId::ALL.iter().map(|&s| (s, state.score(s))).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

// ── Helpers ────────────────────────────────────────────────────────────

fn set_trump(next: &mut RoundState, suit: Suit) {
    next.trump = Some(suit);
    next.phase = Phase::Playing;
    // Bid-winner leads the first trick; current_seat already points at it.
    info!(trump = %suit, leader = %next.current_seat, "trump named");
}

fn play(next: &mut RoundState, seat: SeatId, card: Card) {
    let hand = &mut next.seat_mut(seat).hand;
    if let Some(pos) = hand.iter().position(|&c| c == card) {
        hand.remove(pos);
    }
    next.current_trick.push(PlayedCard { card, played_by: seat });
    trace!(%seat, %card, "card played");

    if next.current_trick.len() < NUM_SEATS {
        next.current_seat = seat.next();
        return;
    }

    let completed = std::mem::take(&mut next.current_trick);
    let lead = completed[0].card.suit;
    let winner = trick::resolve_trick(&completed, lead, next.trump);
    let points = trick::trick_points(&completed);
    next.scores[winner.index()] += points;
    next.tricks.push(completed);
    next.current_seat = winner;
    debug!(trick = next.tricks.len(), %winner, points, "trick taken");

    if next.tricks.len() == TRICKS_PER_ROUND {
        next.phase = Phase::Finished;
        info!(scores = ?next.scores, "round finished");
    }
}
