// ═══════════════════════════════════════════════════════════════════════
// Conservation checks for any round snapshot
// ═══════════════════════════════════════════════════════════════════════

use crate::error::InvariantViolation;
use crate::trick;
use crate::types::*;
use std::collections::HashSet;

/// Verify card conservation, hand sizes, trick shape, and score totals.
/// An undealt round holds no cards and passes trivially.
pub fn check_invariants(state: &RoundState) -> Result<(), InvariantViolation> {
    let in_hands = state.seats.iter().flat_map(|s| s.hand.iter().copied());
    let on_table = state
        .tricks
        .iter()
        .flatten()
        .chain(state.current_trick.iter())
        .map(|p| p.card);
    let all: Vec<Card> = in_hands.chain(on_table).collect();

    if state.phase == Phase::Dealing && all.is_empty() {
        return Ok(());
    }
    if all.len() != DECK_SIZE {
        return Err(InvariantViolation::CardCount { expected: DECK_SIZE, found: all.len() });
    }
    let mut seen = HashSet::with_capacity(DECK_SIZE);
    for card in &all {
        if !seen.insert(*card) {
            return Err(InvariantViolation::DuplicateCard(*card));
        }
    }

    for seat in SeatId::ALL {
        let played = state
            .tricks
            .iter()
            .flatten()
            .chain(state.current_trick.iter())
            .filter(|p| p.played_by == seat)
            .count();
        let Some(expected) = HAND_SIZE.checked_sub(played) else {
            return Err(InvariantViolation::TooManyPlays { seat, played });
        };
        let found = state.hand(seat).len();
        if found != expected {
            return Err(InvariantViolation::HandSize { seat, expected, found });
        }
    }

    if state.tricks.len() > TRICKS_PER_ROUND {
        return Err(InvariantViolation::TooManyTricks(state.tricks.len()));
    }
    for (index, t) in state.tricks.iter().enumerate() {
        if t.len() != NUM_SEATS {
            return Err(InvariantViolation::IncompleteTrick { index, found: t.len() });
        }
    }

    let expected: u16 = state.tricks.iter().map(|t| trick::trick_points(t)).sum();
    let found: u16 = state.scores.iter().sum();
    if expected != found {
        return Err(InvariantViolation::ScoreTotal { expected, found });
    }

    let all_tricks = state.tricks.len() == TRICKS_PER_ROUND;
    if all_tricks != state.is_finished() {
        return Err(InvariantViolation::FinishedMismatch { tricks: state.tricks.len() });
    }
    Ok(())
}
