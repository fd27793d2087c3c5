// ═══════════════════════════════════════════════════════════════════════
// Errors — why an action was refused, and broken snapshot invariants
// ═══════════════════════════════════════════════════════════════════════

use crate::types::*;
use thiserror::Error;

/// Reason an action was refused. The public entry points swallow these
/// and return the snapshot unchanged; `engine::try_apply` surfaces them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("action not allowed during {actual} (expected {expected})")]
    PhaseMismatch { expected: Phase, actual: Phase },

    #[error("{seat} acted out of turn (current: {current})")]
    OutOfTurn { seat: SeatId, current: SeatId },

    #[error("{0} has already passed")]
    InactiveBidder(SeatId),

    #[error("bid {value} is below the minimum of {minimum}")]
    BidTooLow { value: u16, minimum: u16 },

    #[error("bid {value} exceeds the ceiling of {ceiling}")]
    BidAboveCeiling { value: u16, ceiling: u16 },

    #[error("bid {value} is not a multiple of {step} above {floor}")]
    BidOffStep { value: u16, floor: u16, step: u16 },

    #[error("{card} is not in {seat}'s hand")]
    CardNotInHand { seat: SeatId, card: Card },

    #[error("{card} does not follow the lead suit {lead}")]
    MustFollowSuit { card: Card, lead: Suit },
}

/// A snapshot that breaks a conservation invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("expected {expected} cards in play, found {found}")]
    CardCount { expected: usize, found: usize },

    #[error("{0} appears more than once")]
    DuplicateCard(Card),

    #[error("{seat} holds {found} cards, expected {expected}")]
    HandSize { seat: SeatId, expected: usize, found: usize },

    #[error("{seat} is credited with {played} plays, a hand only holds {max}", max = HAND_SIZE)]
    TooManyPlays { seat: SeatId, played: usize },

    #[error("{0} tricks archived, a round has at most {max}", max = TRICKS_PER_ROUND)]
    TooManyTricks(usize),

    #[error("archived trick {index} holds {found} cards")]
    IncompleteTrick { index: usize, found: usize },

    #[error("scores total {found}, archived tricks are worth {expected}")]
    ScoreTotal { expected: u16, found: u16 },

    #[error("finished flag disagrees with {tricks} archived tricks")]
    FinishedMismatch { tricks: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown suit: {0:?}")]
pub struct ParseSuitError(pub String);
