// ═══════════════════════════════════════════════════════════════════════
// Random Agent — uniformly random legal bids and plays.
// Serves as baseline and for testing engine stability.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::Agent;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use twotwenty_engine::types::*;
use twotwenty_engine::visibility::SeatView;

pub struct RandomAgent {
    seat: SeatId,
    rng: ChaCha8Rng,
}

impl RandomAgent {
    pub fn new(seat: SeatId, seed: u64) -> Self {
        RandomAgent {
            seat,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str { "Random" }
    fn seat(&self) -> SeatId { self.seat }

    fn choose_bid(&mut self, view: &SeatView) -> Option<u16> {
        // Pass about as often as any single bid value.
        let options = view.legal_bids.len();
        if options == 0 || self.rng.gen_range(0..=options) == 0 {
            return None;
        }
        view.legal_bids.choose(&mut self.rng).copied()
    }

    fn choose_trump(&mut self, _view: &SeatView) -> Suit {
        *Suit::ALL.choose(&mut self.rng).unwrap_or(&Suit::Hearts)
    }

    fn choose_card(&mut self, view: &SeatView) -> Option<Card> {
        view.legal_plays.choose(&mut self.rng).copied()
    }
}
