// ═══════════════════════════════════════════════════════════════════════
// Round setup — fresh round state and the deal
// ═══════════════════════════════════════════════════════════════════════

use crate::cards;
use crate::engine;
use crate::types::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// An undealt round in the `Dealing` phase. Every call builds an
/// independent value; nothing is shared between rounds.
pub fn create_round(seats: [SeatSpec; NUM_SEATS], bid_rules: BidRules, seed: u64) -> RoundState {
    let seats: Vec<Seat> = seats
        .into_iter()
        .map(|spec| Seat {
            id: spec.id,
            name: spec.name,
            hand: Vec::new(),
            automated: spec.automated,
        })
        .collect();

    RoundState {
        seats,
        current_seat: SeatId(0),
        trump: None,
        current_bid: bid_rules.floor,
        bid_winner: None,
        marriages: Vec::new(),
        tricks: Vec::new(),
        current_trick: Vec::new(),
        scores: [0; NUM_SEATS],
        phase: Phase::Dealing,
        pass_count: 0,
        bids: [BidRecord::Undecided; NUM_SEATS],
        active_seats: SeatId::ALL.to_vec(),
        bid_rules,
        seed,
        revision: 0,
    }
}

/// A dealt round, ready for bidding with seat 0 on turn.
/// Seed controls the shuffle for reproducibility.
pub fn new_round(seats: [SeatSpec; NUM_SEATS], bid_rules: BidRules, seed: u64) -> RoundState {
    engine::advance(&create_round(seats, bid_rules, seed))
}

/// Shuffle a fresh deck from the round's seed and hand out all 32 cards.
pub(crate) fn deal_into(state: &mut RoundState) {
    let mut rng = ChaCha8Rng::seed_from_u64(state.seed);
    let deck = cards::shuffle(&cards::build_deck(), &mut rng);
    let hands = cards::deal(&deck);
    for (seat, hand) in state.seats.iter_mut().zip(hands) {
        seat.hand = hand;
    }
    debug!(seed = state.seed, "dealt");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_round_is_undealt() {
        let state = create_round(SeatSpec::default_table(), BidRules::default(), 1);
        assert_eq!(state.phase, Phase::Dealing);
        assert!(state.seats.iter().all(|s| s.hand.is_empty()));
        assert_eq!(state.current_bid, 60);
        assert_eq!(state.active_seats.len(), NUM_SEATS);
    }

    #[test]
    fn test_new_round_deals_and_opens_bidding() {
        let state = new_round(SeatSpec::default_table(), BidRules::default(), 42);
        assert_eq!(state.phase, Phase::Bidding);
        assert_eq!(state.current_seat, SeatId(0));
        for seat in &state.seats {
            assert_eq!(seat.hand.len(), HAND_SIZE);
        }
        assert_eq!(state.seats[0].name, "You");
        assert!(!state.seats[0].automated);
        assert!(state.seats[3].automated);
    }

    #[test]
    fn test_deterministic_seed() {
        let s1 = new_round(SeatSpec::default_table(), BidRules::default(), 123);
        let s2 = new_round(SeatSpec::default_table(), BidRules::default(), 123);
        let s3 = new_round(SeatSpec::default_table(), BidRules::default(), 124);
        assert_eq!(s1, s2);
        assert_ne!(s1.seats[0].hand, s3.seats[0].hand);
    }
}
