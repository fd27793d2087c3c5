// ═══════════════════════════════════════════════════════════════════════
// Visibility / Information Model
//
//   PUBLIC  — bids, trump, cards on the table, archived tricks, scores,
//             how many cards each seat still holds
//   PRIVATE — the viewer's own hand
//   HIDDEN  — every other hand, and the deal seed
//
// Agents MUST only receive SeatView, never the raw RoundState.
// ═══════════════════════════════════════════════════════════════════════

use crate::bidding;
use crate::legality;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// The view of a round that a specific seat is allowed to see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    // ── Public info ────────────────────────────────────────
    pub viewer: SeatId,
    pub phase: Phase,
    pub current_seat: SeatId,
    pub trump: Option<Suit>,
    pub current_bid: u16,
    pub bid_winner: Option<SeatId>,
    pub bid_rules: BidRules,
    pub bids: [BidRecord; NUM_SEATS],
    pub active_seats: Vec<SeatId>,
    pub seat_names: Vec<String>,
    pub cards_in_hand: [u8; NUM_SEATS],
    pub current_trick: Vec<PlayedCard>,
    pub tricks: Vec<Vec<PlayedCard>>,
    pub scores: [u16; NUM_SEATS],

    // ── Private info (only for the viewer) ─────────────────
    pub my_hand: Vec<Card>,
    /// Cards the viewer may play right now (empty unless on turn in play).
    pub legal_plays: Vec<Card>,
    /// Bids the viewer may offer right now (empty unless on turn in bidding).
    pub legal_bids: Vec<u16>,
}

impl SeatView {
    pub fn is_my_turn(&self) -> bool {
        self.current_seat == self.viewer
    }

    pub fn lead_card(&self) -> Option<Card> {
        self.current_trick.first().map(|p| p.card)
    }
}

/// Build the SeatView for `viewer`.
pub fn seat_view(state: &RoundState, viewer: SeatId) -> SeatView {
    let on_turn = state.current_seat == viewer;

    let mut cards_in_hand = [0u8; NUM_SEATS];
    for (count, seat) in cards_in_hand.iter_mut().zip(&state.seats) {
        *count = seat.hand.len() as u8;
    }

    let legal_plays = if on_turn {
        legality::current_valid_plays(state)
    } else {
        Vec::new()
    };
    let legal_bids = if on_turn {
        bidding::legal_bids(state)
    } else {
        Vec::new()
    };

    SeatView {
        viewer,
        phase: state.phase,
        current_seat: state.current_seat,
        trump: state.trump,
        current_bid: state.current_bid,
        bid_winner: state.bid_winner,
        bid_rules: state.bid_rules,
        bids: state.bids,
        active_seats: state.active_seats.clone(),
        seat_names: state.seats.iter().map(|s| s.name.clone()).collect(),
        cards_in_hand,
        current_trick: state.current_trick.clone(),
        tricks: state.tricks.clone(),
        scores: state.scores,
        my_hand: state.hand(viewer).to_vec(),
        legal_plays,
        legal_bids,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::new_round;

    #[test]
    fn test_view_hides_other_hands() {
        let state = new_round(SeatSpec::default_table(), BidRules::default(), 7);
        let view = seat_view(&state, SeatId(2));
        assert_eq!(view.my_hand, state.seats[2].hand);
        assert_eq!(view.cards_in_hand, [8, 8, 8, 8]);
        assert!(!view.is_my_turn());
        assert!(view.legal_bids.is_empty());
        assert_eq!(view.seat_names, vec!["You", "Bot 1", "Bot 2", "Bot 3"]);
    }

    #[test]
    fn test_view_on_turn_lists_bids() {
        let state = new_round(SeatSpec::default_table(), BidRules::default(), 7);
        let view = seat_view(&state, SeatId(0));
        assert!(view.is_my_turn());
        assert_eq!(view.legal_bids.first(), Some(&80));
        assert!(view.legal_plays.is_empty());
    }
}
