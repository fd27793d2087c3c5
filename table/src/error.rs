// ═══════════════════════════════════════════════════════════════════════
// Table-level errors
// ═══════════════════════════════════════════════════════════════════════

use std::path::PathBuf;
use thiserror::Error;
use twotwenty_engine::{InvariantViolation, Phase, RuleViolation, SeatId};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("round exceeded {0} decisions without finishing")]
    DecisionLimit(usize),

    #[error("round stuck in {phase}: nothing scheduled for {seat}")]
    Stuck { phase: Phase, seat: SeatId },

    #[error("agent for {seat} chose an illegal action: {reason}")]
    IllegalAgentAction { seat: SeatId, reason: RuleViolation },

    #[error("agent for {0} had no decision")]
    NoDecision(SeatId),

    #[error("round {seed} broke an invariant: {violation}")]
    Invariant { seed: u64, violation: InvariantViolation },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
