// ═══════════════════════════════════════════════════════════════════════
// Heuristic Agent — the placeholder table bot.
// Raises by one step on a coin flip when the hand looks decent, leads
// or follows with the first legal card, and names its richest suit.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::Agent;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;
use twotwenty_engine::cards;
use twotwenty_engine::types::*;
use twotwenty_engine::visibility::SeatView;

/// Hands worth this many points or fewer never bid.
const MIN_HAND_POINTS: u16 = 20;

pub struct HeuristicAgent {
    seat: SeatId,
    rng: ChaCha8Rng,
}

impl HeuristicAgent {
    pub fn new(seat: SeatId, seed: u64) -> Self {
        HeuristicAgent {
            seat,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn wants_to_bid(&mut self, view: &SeatView) -> bool {
        let points = cards::hand_points(&view.my_hand);
        let below_top = view.current_bid < view.bid_rules.ceiling.saturating_sub(view.bid_rules.step);
        // Coin flip first so the RNG stream does not depend on the hand.
        self.rng.gen_bool(0.5) && points > MIN_HAND_POINTS && below_top
    }
}

impl Agent for HeuristicAgent {
    fn name(&self) -> &str { "Heuristic" }
    fn seat(&self) -> SeatId { self.seat }

    fn choose_bid(&mut self, view: &SeatView) -> Option<u16> {
        if !self.wants_to_bid(view) {
            trace!(seat = %self.seat, "heuristic passes");
            return None;
        }
        // Smallest raise, if it is still on the ladder.
        view.legal_bids.first().copied()
    }

    fn choose_trump(&mut self, view: &SeatView) -> Suit {
        cards::strongest_suit(&view.my_hand).unwrap_or(Suit::Hearts)
    }

    fn choose_card(&mut self, view: &SeatView) -> Option<Card> {
        view.legal_plays.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RandomAgent;
    use twotwenty_engine::engine::{self, Action};
    use twotwenty_engine::setup::new_round;
    use twotwenty_engine::visibility::seat_view;

    fn round(seed: u64) -> RoundState {
        new_round(SeatSpec::default_table(), BidRules::default(), seed)
    }

    #[test]
    fn test_heuristic_bids_minimum_or_passes() {
        for seed in 0..20 {
            let state = round(seed);
            let view = seat_view(&state, SeatId(0));
            let mut agent = HeuristicAgent::new(SeatId(0), seed);
            match agent.decide(&view) {
                Some(Action::Bid(v)) => assert_eq!(v, 80),
                Some(Action::Pass) => {}
                other => panic!("unexpected decision {:?}", other),
            }
        }
    }

    #[test]
    fn test_heuristic_never_bids_near_ceiling() {
        let mut state = round(3);
        state = engine::place_bid(&state, 200);
        let view = seat_view(&state, SeatId(1));
        let mut agent = HeuristicAgent::new(SeatId(1), 3);
        for _ in 0..10 {
            assert_eq!(agent.decide(&view), Some(Action::Pass));
        }
    }

    #[test]
    fn test_weak_hand_always_passes() {
        let mut state = round(3);
        state.seats[0].hand = vec![
            Card::new(Suit::Hearts, Rank::Seven),
            Card::new(Suit::Hearts, Rank::Eight),
            Card::new(Suit::Clubs, Rank::Ten),
        ];
        let view = seat_view(&state, SeatId(0));
        let mut agent = HeuristicAgent::new(SeatId(0), 99);
        for _ in 0..10 {
            assert_eq!(agent.choose_bid(&view), None);
        }
    }

    #[test]
    fn test_heuristic_plays_first_legal_card() {
        let mut state = round(8);
        while state.phase == Phase::Bidding {
            state = engine::pass(&state);
        }
        assert_eq!(state.phase, Phase::Playing);
        let seat = state.current_seat;
        let view = seat_view(&state, seat);
        let mut agent = HeuristicAgent::new(seat, 1);
        assert_eq!(agent.decide(&view), Some(Action::PlayCard(view.legal_plays[0])));
        assert_eq!(agent.choose_trump(&view), cards::strongest_suit(&view.my_hand).unwrap());
    }

    #[test]
    fn test_agents_do_nothing_off_turn() {
        let state = round(8);
        let view = seat_view(&state, SeatId(2));
        assert_eq!(HeuristicAgent::new(SeatId(2), 0).decide(&view), None);
        assert_eq!(RandomAgent::new(SeatId(2), 0).decide(&view), None);
    }

    #[test]
    fn test_random_agent_stays_legal() {
        let mut state = round(17);
        let mut agents: Vec<RandomAgent> = SeatId::ALL.iter().map(|&s| RandomAgent::new(s, 17 + s.0 as u64)).collect();
        let mut steps = 0;
        while !state.is_finished() && steps < 200 {
            steps += 1;
            let seat = state.current_seat;
            let view = seat_view(&state, seat);
            let action = agents[seat.index()].decide(&view).unwrap();
            let next = engine::try_apply(&state, seat, action).unwrap();
            state = next;
        }
        assert!(state.is_finished());
    }
}
