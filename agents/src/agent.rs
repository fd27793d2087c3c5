// ═══════════════════════════════════════════════════════════════════════
// Agent Trait — interface for automated seats
//
// KEY DESIGN PRINCIPLE:
//   Agents receive a `SeatView` (not raw RoundState), which only
//   contains what that seat may legally know: its own hand, the table,
//   and the bids so far. Legal plays and legal bids come precomputed.
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};
use twotwenty_engine::engine::Action;
use twotwenty_engine::types::*;
use twotwenty_engine::visibility::SeatView;

use crate::{HeuristicAgent, RandomAgent};

/// Trait that all automated seat policies implement.
pub trait Agent: Send + Sync {
    /// Human-readable policy name.
    fn name(&self) -> &str;

    /// The seat this agent is playing.
    fn seat(&self) -> SeatId;

    /// Decide an action for the current view, or `None` when the view
    /// asks nothing of this seat.
    fn decide(&mut self, view: &SeatView) -> Option<Action> {
        if !view.is_my_turn() {
            return None;
        }
        match view.phase {
            Phase::Bidding => Some(match self.choose_bid(view) {
                Some(value) => Action::Bid(value),
                None => Action::Pass,
            }),
            Phase::SelectingTrump => Some(Action::SelectTrump(self.choose_trump(view))),
            Phase::Playing => self.choose_card(view).map(Action::PlayCard),
            Phase::Dealing | Phase::Finished => None,
        }
    }

    /// Bid value to offer, `None` to pass. Should be one of `view.legal_bids`.
    fn choose_bid(&mut self, view: &SeatView) -> Option<u16>;

    /// Trump suit, when this seat won the auction and must name it.
    fn choose_trump(&mut self, view: &SeatView) -> Suit;

    /// Card to play. Should be one of `view.legal_plays`.
    fn choose_card(&mut self, view: &SeatView) -> Option<Card>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    #[default]
    Heuristic,
    Random,
}

impl std::str::FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "heuristic" => Ok(AgentKind::Heuristic),
            "random" => Ok(AgentKind::Random),
            other => Err(format!("unknown agent kind: {other}")),
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentKind::Heuristic => write!(f, "heuristic"),
            AgentKind::Random => write!(f, "random"),
        }
    }
}

pub fn make_agent(kind: AgentKind, seat: SeatId, seed: u64) -> Box<dyn Agent> {
    match kind {
        AgentKind::Heuristic => Box::new(HeuristicAgent::new(seat, seed)),
        AgentKind::Random => Box::new(RandomAgent::new(seat, seed)),
    }
}
