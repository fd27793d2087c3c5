// ═══════════════════════════════════════════════════════════════════════
// Trick evaluation — winner and point value of a completed trick
// ═══════════════════════════════════════════════════════════════════════

use crate::types::*;

/// Does `challenger` take the trick from the card currently winning it?
///
/// Same suit: higher rank wins. Different suits: trump beats non-trump,
/// then lead suit beats the rest. Between two cards that are neither,
/// the one already winning keeps the trick.
pub fn beats(challenger: Card, winning: Card, lead: Suit, trump: Option<Suit>) -> bool {
    if challenger.suit == winning.suit {
        return challenger.rank.strength() > winning.rank.strength();
    }
    if Some(winning.suit) == trump {
        return false;
    }
    if Some(challenger.suit) == trump {
        return true;
    }
    if winning.suit == lead {
        return false;
    }
    challenger.suit == lead
}

/// Seat that played the strongest card. Expects a non-empty trick
/// (callers only resolve once all four cards are down).
pub fn resolve_trick(trick: &[PlayedCard], lead: Suit, trump: Option<Suit>) -> SeatId {
    let mut winner = trick[0];
    for played in &trick[1..] {
        if beats(played.card, winner.card, lead, trump) {
            winner = *played;
        }
    }
    winner.played_by
}

pub fn trick_points(trick: &[PlayedCard]) -> u16 {
    trick.iter().map(|p| p.card.points()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(seat: u8, suit: Suit, rank: Rank) -> PlayedCard {
        PlayedCard { card: Card::new(suit, rank), played_by: SeatId(seat) }
    }

    #[test]
    fn test_off_suit_never_takes_from_earlier_off_suit() {
        let early = Card::new(Suit::Clubs, Rank::Seven);
        let late = Card::new(Suit::Diamonds, Rank::Ace);
        assert!(!beats(late, early, Suit::Spades, Some(Suit::Hearts)));
    }

    #[test]
    fn test_higher_trump_overtrumps() {
        let trick = [
            p(0, Suit::Spades, Rank::Ace),
            p(1, Suit::Hearts, Rank::Seven),
            p(2, Suit::Hearts, Rank::Jack),
            p(3, Suit::Spades, Rank::King),
        ];
        assert_eq!(resolve_trick(&trick, Suit::Spades, Some(Suit::Hearts)), SeatId(2));
    }

    #[test]
    fn test_winner_follows_played_by_not_position() {
        // Seat 2 led; positions and seat ids differ.
        let trick = [
            p(2, Suit::Clubs, Rank::Ten),
            p(3, Suit::Clubs, Rank::Nine),
            p(0, Suit::Clubs, Rank::Queen),
            p(1, Suit::Diamonds, Rank::Ace),
        ];
        assert_eq!(resolve_trick(&trick, Suit::Clubs, None), SeatId(0));
        assert_eq!(trick_points(&trick), 35);
    }
}
