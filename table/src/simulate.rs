// ═══════════════════════════════════════════════════════════════════════
// Batch simulation — many independent rounds in parallel
// ═══════════════════════════════════════════════════════════════════════

use crate::config::TableConfig;
use crate::error::TableError;
use crate::runner::{run_round, RoundResult};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};
use twotwenty_engine::types::NUM_SEATS;

/// Seeds of consecutive rounds are this far apart.
pub const SEED_STRIDE: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub rounds: usize,
    pub failed: usize,
    pub average_points: [f64; NUM_SEATS],
    pub bid_wins: [usize; NUM_SEATS],
    pub contracts_made: usize,
    pub average_winning_bid: f64,
    pub first_error: Option<String>,
}

impl SimulationSummary {
    pub fn contract_rate(&self) -> f64 {
        let completed = self.rounds - self.failed;
        if completed == 0 {
            0.0
        } else {
            self.contracts_made as f64 / completed as f64
        }
    }
}

/// Play `rounds` rounds with every seat automated, round `i` dealt from
/// `base_seed + i * SEED_STRIDE`.
pub fn simulate(config: &TableConfig, rounds: usize, base_seed: u64) -> SimulationSummary {
    let config = config.all_automated();
    info!(rounds, base_seed, agent = %config.agent, "simulation started");

    let results: Vec<Result<RoundResult, TableError>> = (0..rounds)
        .into_par_iter()
        .map(|i| run_round(&config, base_seed.wrapping_add(i as u64 * SEED_STRIDE)))
        .collect();

    let summary = summarize(&results);
    if summary.failed > 0 {
        warn!(failed = summary.failed, "some rounds did not finish");
    }
    summary
}

pub fn summarize(results: &[Result<RoundResult, TableError>]) -> SimulationSummary {
    let mut totals = [0u64; NUM_SEATS];
    let mut bid_wins = [0usize; NUM_SEATS];
    let mut contracts_made = 0;
    let mut bid_total = 0u64;
    let mut failed = 0;
    let mut first_error = None;

    for result in results {
        match result {
            Ok(round) => {
                for (total, score) in totals.iter_mut().zip(round.scores) {
                    *total += score as u64;
                }
                if let Some(winner) = round.bid_winner {
                    bid_wins[winner.index()] += 1;
                }
                if round.contract_made {
                    contracts_made += 1;
                }
                bid_total += round.winning_bid as u64;
            }
            Err(e) => {
                failed += 1;
                first_error.get_or_insert_with(|| e.to_string());
            }
        }
    }

    let completed = results.len() - failed;
    let mean = |sum: u64| if completed == 0 { 0.0 } else { sum as f64 / completed as f64 };
    SimulationSummary {
        rounds: results.len(),
        failed,
        average_points: totals.map(mean),
        bid_wins,
        contracts_made,
        average_winning_bid: mean(bid_total),
        first_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::init_test_logging;
    use twotwenty_agents::AgentKind;
    use twotwenty_engine::types::TOTAL_POINTS;

    #[test]
    fn test_simulate_accumulates() {
        init_test_logging();
        let summary = simulate(&TableConfig::default(), 24, 42);
        assert_eq!(summary.rounds, 24);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.bid_wins.iter().sum::<usize>(), 24);
        let total: f64 = summary.average_points.iter().sum();
        assert!((total - TOTAL_POINTS as f64).abs() < 1e-9);
        assert!(summary.average_winning_bid >= 60.0);
        assert!((0.0..=1.0).contains(&summary.contract_rate()));
    }

    #[test]
    fn test_simulate_matches_sequential_runs() {
        let config = TableConfig { agent: AgentKind::Random, ..TableConfig::default() };
        let parallel = simulate(&config, 8, 7);
        let automated = config.all_automated();
        let sequential: Vec<_> = (0..8u64).map(|i| run_round(&automated, 7 + i * SEED_STRIDE)).collect();
        assert_eq!(parallel, summarize(&sequential));
    }

    #[test]
    fn test_failures_are_counted() {
        let config = TableConfig { max_decisions: 3, ..TableConfig::default() };
        let summary = simulate(&config, 4, 0);
        assert_eq!(summary.failed, 4);
        assert_eq!(summary.average_points, [0.0; NUM_SEATS]);
        assert!(summary.first_error.unwrap().contains("3 decisions"));
    }
}
