// ═══════════════════════════════════════════════════════════════════════
// Deck — construction, shuffling, dealing, and hand helpers
// ═══════════════════════════════════════════════════════════════════════

use crate::types::*;
use rand::seq::SliceRandom;
use rand::Rng;

// ── Deck ───────────────────────────────────────────────────────────────

/// The 32 canonical cards, one per (suit, rank), in suit-then-rank order.
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// Uniformly random permutation of `deck`. The input is left untouched.
pub fn shuffle<R: Rng + ?Sized>(deck: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Partition a full deck into four hands of eight, in seat order.
/// Seat 0 gets the first eight cards, seat 1 the next, and so on.
/// Each hand comes back sorted for display.
pub fn deal(deck: &[Card]) -> [Vec<Card>; NUM_SEATS] {
    debug_assert_eq!(deck.len(), DECK_SIZE);
    let mut hands: [Vec<Card>; NUM_SEATS] = Default::default();
    for (hand, chunk) in hands.iter_mut().zip(deck.chunks(HAND_SIZE)) {
        hand.extend_from_slice(chunk);
        sort_hand(hand);
    }
    hands
}

/// Hearts, clubs, diamonds, spades; strongest rank first within a suit.
pub fn sort_hand(hand: &mut [Card]) {
    hand.sort_by_key(|c| c.display_key());
}

// ── Hand helpers ───────────────────────────────────────────────────────

pub fn hand_points(cards: &[Card]) -> u16 {
    cards.iter().map(|c| c.points()).sum()
}

/// Points held in each suit, in order of first appearance in `hand`.
pub fn suit_strengths(hand: &[Card]) -> Vec<(Suit, u16)> {
    let mut totals: Vec<(Suit, u16)> = Vec::with_capacity(4);
    for card in hand {
        match totals.iter_mut().find(|(s, _)| *s == card.suit) {
            Some((_, total)) => *total += card.points(),
            None => totals.push((card.suit, card.points())),
        }
    }
    totals
}

/// Suit carrying the most points in `hand`. Ties keep the suit seen
/// first. Only suits present in the hand are candidates.
pub fn strongest_suit(hand: &[Card]) -> Option<Suit> {
    let mut best: Option<(Suit, u16)> = None;
    for (suit, total) in suit_strengths(hand) {
        match best {
            Some((_, top)) if total <= top => {}
            _ => best = Some((suit, total)),
        }
    }
    best.map(|(suit, _)| suit)
}

/// Exactly a King and a Queen of the same suit.
pub fn is_marriage(cards: &[Card]) -> bool {
    let [a, b] = cards else {
        return false;
    };
    a.suit == b.suit
        && matches!(
            (a.rank, b.rank),
            (Rank::King, Rank::Queen) | (Rank::Queen, Rank::King)
        )
}
