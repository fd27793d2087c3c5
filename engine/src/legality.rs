// ═══════════════════════════════════════════════════════════════════════
// Legal plays — follow suit if you can, otherwise anything goes
// ═══════════════════════════════════════════════════════════════════════

use crate::error::RuleViolation;
use crate::types::*;

/// Cards in `hand` that may be played onto a trick led by `lead`.
/// With no lead card (this seat leads) the whole hand is legal.
pub fn valid_plays(hand: &[Card], lead: Option<Card>) -> Vec<Card> {
    let Some(lead) = lead else {
        return hand.to_vec();
    };
    if !hand.iter().any(|c| c.suit == lead.suit) {
        return hand.to_vec();
    }
    hand.iter().copied().filter(|c| c.suit == lead.suit).collect()
}

/// Check a single card against the hand and lead.
pub fn check_play(seat: SeatId, hand: &[Card], lead: Option<Card>, card: Card) -> Result<(), RuleViolation> {
    if !hand.contains(&card) {
        return Err(RuleViolation::CardNotInHand { seat, card });
    }
    if !valid_plays(hand, lead).contains(&card) {
        // Only reachable with a lead card present.
        let lead = lead.map_or(card.suit, |l| l.suit);
        return Err(RuleViolation::MustFollowSuit { card, lead });
    }
    Ok(())
}

/// Legal plays for whoever is on turn, empty outside the playing phase.
pub fn current_valid_plays(state: &RoundState) -> Vec<Card> {
    if state.phase != Phase::Playing {
        return Vec::new();
    }
    valid_plays(&state.current().hand, state.lead_card())
}
