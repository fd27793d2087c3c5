// ═══════════════════════════════════════════════════════════════════════
// Table configuration — seats, bid ladder, bot pacing
// ═══════════════════════════════════════════════════════════════════════

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use twotwenty_agents::AgentKind;
use twotwenty_engine::types::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub seats: [SeatSpec; NUM_SEATS],
    pub bid_rules: BidRules,
    /// Delay before an automated seat's action is applied.
    pub bot_delay_ms: u64,
    /// Fixed deal seed. `None` lets the caller pick one.
    pub seed: Option<u64>,
    /// Safety limit on accepted decisions per round.
    pub max_decisions: usize,
    /// Policy for automated seats (and stand-ins for humans in headless runs).
    pub agent: AgentKind,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            seats: SeatSpec::default_table(),
            bid_rules: BidRules::default(),
            bot_delay_ms: 1000,
            seed: None,
            max_decisions: 500,
            agent: AgentKind::default(),
        }
    }
}

impl TableConfig {
    /// Read and validate a JSON config file. Missing fields take defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ids: HashSet<&str> = self.seats.iter().map(|s| s.id.as_str()).collect();
        if ids.len() != NUM_SEATS {
            return Err(ConfigError::Invalid("seat ids must be distinct".into()));
        }
        let rules = self.bid_rules;
        if rules.step == 0 {
            return Err(ConfigError::Invalid("bid step must be positive".into()));
        }
        if rules.floor >= rules.ceiling {
            return Err(ConfigError::Invalid(format!(
                "bid floor {} must be below ceiling {}",
                rules.floor, rules.ceiling
            )));
        }
        if (rules.ceiling - rules.floor) % rules.step != 0 {
            return Err(ConfigError::Invalid(format!(
                "ceiling {} is not on the {}-point ladder from {}",
                rules.ceiling, rules.step, rules.floor
            )));
        }
        if self.max_decisions == 0 {
            return Err(ConfigError::Invalid("max_decisions must be positive".into()));
        }
        Ok(())
    }

    /// Same table with every seat automated, for headless simulation.
    pub fn all_automated(&self) -> Self {
        let mut config = self.clone();
        for seat in &mut config.seats {
            seat.automated = true;
        }
        config
    }
}
