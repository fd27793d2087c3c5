// ═══════════════════════════════════════════════════════════════════════
// Round Runner — plays one headless round to completion
// ═══════════════════════════════════════════════════════════════════════

use crate::config::TableConfig;
use crate::error::TableError;
use crate::table::{StepOutcome, Table};
use serde::Serialize;
use tracing::{debug, info};
use twotwenty_agents::{make_agent, Agent};
use twotwenty_engine::engine;
use twotwenty_engine::invariants::check_invariants;
use twotwenty_engine::types::*;
use twotwenty_engine::visibility::seat_view;

/// Offset mixed into stand-in seeds so they differ from the table's bots.
const STAND_IN_SEED: u64 = 0x2_20;

/// Result of a completed round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub seed: u64,
    pub bid_winner: Option<SeatId>,
    pub winning_bid: u16,
    pub trump: Option<Suit>,
    pub scores: [u16; NUM_SEATS],
    pub standings: Vec<(SeatId, u16)>,
    /// Bid winner took at least as many points as they bid.
    pub contract_made: bool,
    /// Accepted actions, human and automated.
    pub decisions: usize,
    /// Logical time the round took, given the table's bot delay.
    pub clock_ms: u64,
}

/// Run a complete round. Human seats are played by stand-in agents of
/// the configured kind, submitting immediately like a human would.
pub fn run_round(config: &TableConfig, seed: u64) -> Result<RoundResult, TableError> {
    let mut table = Table::from_config(config, seed);
    let mut stand_ins: [Option<Box<dyn Agent>>; NUM_SEATS] = std::array::from_fn(|i| {
        (!config.seats[i].automated)
            .then(|| make_agent(config.agent, SeatId(i as u8), seed ^ (STAND_IN_SEED + i as u64)))
    });
    let mut decisions = 0;

    loop {
        if let Err(violation) = check_invariants(table.state()) {
            return Err(TableError::Invariant { seed, violation });
        }
        if table.state().is_finished() {
            let result = build_result(table.state(), decisions, table.clock_ms());
            info!(seed, winner = ?result.bid_winner, bid = result.winning_bid, made = result.contract_made, "round finished");
            return Ok(result);
        }
        if decisions >= config.max_decisions {
            return Err(TableError::DecisionLimit(config.max_decisions));
        }

        if let Some(seat) = table.awaiting_human() {
            let agent = stand_ins[seat.index()].as_mut().ok_or(TableError::NoDecision(seat))?;
            let view = seat_view(table.state(), seat);
            let action = agent.decide(&view).ok_or(TableError::NoDecision(seat))?;
            table
                .submit(seat, action)
                .map_err(|reason| TableError::IllegalAgentAction { seat, reason })?;
        } else {
            match table.step() {
                Some(StepOutcome::Applied { .. }) => {}
                Some(StepOutcome::Stale { seat, .. }) => {
                    debug!(%seat, "skipping stale action");
                    continue;
                }
                Some(StepOutcome::Rejected { seat, reason, .. }) => {
                    return Err(TableError::IllegalAgentAction { seat, reason });
                }
                None => {
                    let state = table.state();
                    return Err(TableError::Stuck { phase: state.phase, seat: state.current_seat });
                }
            }
        }
        decisions += 1;
    }
}

fn build_result(state: &RoundState, decisions: usize, clock_ms: u64) -> RoundResult {
    let contract_made = state
        .bid_winner
        .is_some_and(|winner| state.score(winner) >= state.current_bid);
    RoundResult {
        seed: state.seed,
        bid_winner: state.bid_winner,
        winning_bid: state.current_bid,
        trump: state.trump,
        scores: state.scores,
        standings: engine::standings(state),
        contract_made,
        decisions,
        clock_ms,
    }
}
