// ═══════════════════════════════════════════════════════════════════════
// Core types — cards, seats, bids, and the round snapshot
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};
use std::fmt;

/// Seats at the table are fixed at four, indexed 0..3.
pub const NUM_SEATS: usize = 4;
/// 4 suits × 8 ranks.
pub const DECK_SIZE: usize = 32;
pub const HAND_SIZE: usize = DECK_SIZE / NUM_SEATS;
/// A round is exactly one trick per card in hand.
pub const TRICKS_PER_ROUND: usize = HAND_SIZE;
/// Sum of every card's points; the game is named after it.
pub const TOTAL_POINTS: u16 = 220;

// ── Suit ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// Deck construction order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Order suits are grouped in when a hand is sorted for display.
    pub const DISPLAY_ORDER: [Suit; 4] = [Suit::Hearts, Suit::Clubs, Suit::Diamonds, Suit::Spades];

    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    fn display_index(self) -> usize {
        Suit::DISPLAY_ORDER.iter().position(|&s| s == self).unwrap_or(0)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suit::Hearts => write!(f, "hearts"),
            Suit::Diamonds => write!(f, "diamonds"),
            Suit::Clubs => write!(f, "clubs"),
            Suit::Spades => write!(f, "spades"),
        }
    }
}

impl std::str::FromStr for Suit {
    type Err = crate::error::ParseSuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hearts" | "heart" | "h" | "♥" => Ok(Suit::Hearts),
            "diamonds" | "diamond" | "d" | "♦" => Ok(Suit::Diamonds),
            "clubs" | "club" | "c" | "♣" => Ok(Suit::Clubs),
            "spades" | "spade" | "s" | "♠" => Ok(Suit::Spades),
            other => Err(crate::error::ParseSuitError(other.to_string())),
        }
    }
}

// ── Rank ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    King,
    Queen,
    Jack,
    Ten,
    Nine,
    Eight,
    Seven,
}

impl Rank {
    /// Strongest first.
    pub const ALL: [Rank; 8] = [
        Rank::Ace,
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Ten,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
    ];

    /// Fixed point value of a card of this rank.
    pub fn points(self) -> u16 {
        match self {
            Rank::Ace => 15,
            Rank::King | Rank::Queen | Rank::Jack | Rank::Ten => 10,
            Rank::Nine | Rank::Eight | Rank::Seven => 0,
        }
    }

    /// Trick-taking strength within a suit. Higher wins.
    pub fn strength(self) -> u8 {
        match self {
            Rank::Ace => 7,
            Rank::King => 6,
            Rank::Queen => 5,
            Rank::Jack => 4,
            Rank::Ten => 3,
            Rank::Nine => 2,
            Rank::Eight => 1,
            Rank::Seven => 0,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rank::Ace => "A",
            Rank::King => "K",
            Rank::Queen => "Q",
            Rank::Jack => "J",
            Rank::Ten => "10",
            Rank::Nine => "9",
            Rank::Eight => "8",
            Rank::Seven => "7",
        };
        f.write_str(s)
    }
}

// ── Card ───────────────────────────────────────────────────────────────

/// A card face. Points are derived from the rank and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Card { suit, rank }
    }

    pub fn points(self) -> u16 {
        self.rank.points()
    }

    /// Sort key for display: suit group first, then strongest rank first.
    pub fn display_key(self) -> (usize, u8) {
        (self.suit.display_index(), 7 - self.rank.strength())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.symbol())
    }
}

/// A card in a trick, tagged with the seat that played it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedCard {
    pub card: Card,
    pub played_by: SeatId,
}

// ── Seat ───────────────────────────────────────────────────────────────

/// Compact, copyable seat index (0..3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeatId(pub u8);

impl SeatId {
    pub const ALL: [SeatId; NUM_SEATS] = [SeatId(0), SeatId(1), SeatId(2), SeatId(3)];

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Next seat clockwise, wrapping around.
    pub fn next(self) -> SeatId {
        SeatId((self.0 + 1) % NUM_SEATS as u8)
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat {}", self.0)
    }
}

/// Static description of who sits in a seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSpec {
    pub id: String,
    pub name: String,
    pub automated: bool,
}

impl SeatSpec {
    pub fn new(id: impl Into<String>, name: impl Into<String>, automated: bool) -> Self {
        SeatSpec { id: id.into(), name: name.into(), automated }
    }

    /// One human ("You") and three bots.
    pub fn default_table() -> [SeatSpec; NUM_SEATS] {
        [
            SeatSpec::new("p1", "You", false),
            SeatSpec::new("p2", "Bot 1", true),
            SeatSpec::new("p3", "Bot 2", true),
            SeatSpec::new("p4", "Bot 3", true),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: String,
    pub name: String,
    /// Display order only; play order is unaffected.
    pub hand: Vec<Card>,
    pub automated: bool,
}

// ── Bidding ────────────────────────────────────────────────────────────

/// What a seat has done so far in the auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BidRecord {
    #[default]
    Undecided,
    Bid(u16),
    Passed,
}

impl fmt::Display for BidRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BidRecord::Undecided => Ok(()),
            BidRecord::Bid(v) => write!(f, "Bid: {}", v),
            BidRecord::Passed => write!(f, "Passed"),
        }
    }
}

/// Bid ladder. Bidding opens at `floor`; every accepted bid is at least
/// `step` above the current one, on the ladder, and at most `ceiling`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidRules {
    pub floor: u16,
    pub step: u16,
    pub ceiling: u16,
}

impl Default for BidRules {
    fn default() -> Self {
        BidRules { floor: 60, step: 20, ceiling: 220 }
    }
}

/// King + Queen of one suit. Modelled but not scored by this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marriage {
    pub suit: Suit,
    pub shown: bool,
}

// ── Phase ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Dealing,
    Bidding,
    SelectingTrump,
    Playing,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Dealing => write!(f, "dealing"),
            Phase::Bidding => write!(f, "bidding"),
            Phase::SelectingTrump => write!(f, "selecting trump"),
            Phase::Playing => write!(f, "playing"),
            Phase::Finished => write!(f, "finished"),
        }
    }
}

// ── Round State ────────────────────────────────────────────────────────

/// Complete snapshot of one round. Actions never mutate a snapshot in
/// place; the engine clones, transforms the clone, and returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub seats: Vec<Seat>,
    pub current_seat: SeatId,
    pub trump: Option<Suit>,
    pub current_bid: u16,
    pub bid_winner: Option<SeatId>,
    pub marriages: Vec<Marriage>,
    /// Archived tricks, each exactly four cards in play order.
    pub tricks: Vec<Vec<PlayedCard>>,
    pub current_trick: Vec<PlayedCard>,
    pub scores: [u16; NUM_SEATS],
    pub phase: Phase,
    pub pass_count: u8,
    pub bids: [BidRecord; NUM_SEATS],
    /// Seats still in the auction, in seat order.
    pub active_seats: Vec<SeatId>,
    pub bid_rules: BidRules,

    // Deterministic RNG
    pub seed: u64,

    /// Bumped once per accepted action.
    pub revision: u64,
}

impl RoundState {
    pub fn seat(&self, id: SeatId) -> &Seat {
        &self.seats[id.index()]
    }

    pub fn seat_mut(&mut self, id: SeatId) -> &mut Seat {
        &mut self.seats[id.index()]
    }

    /// The seat whose turn it is.
    pub fn current(&self) -> &Seat {
        self.seat(self.current_seat)
    }

    pub fn hand(&self, id: SeatId) -> &[Card] {
        &self.seat(id).hand
    }

    /// First card of the trick in progress.
    pub fn lead_card(&self) -> Option<Card> {
        self.current_trick.first().map(|p| p.card)
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.lead_card().map(|c| c.suit)
    }

    pub fn is_active_bidder(&self, id: SeatId) -> bool {
        self.active_seats.contains(&id)
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn score(&self, id: SeatId) -> u16 {
        self.scores[id.index()]
    }
}
