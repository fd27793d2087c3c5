// ═══════════════════════════════════════════════════════════════════════
// Table — the single writer of a live round
//
// Owns the current snapshot, the agents for automated seats, and the
// queue of their deferred decisions. Humans act through `submit`; bots
// act when the logical clock reaches their due time (`step`).
//
// Ordering rules:
//   - only the seat on turn ever gets an action queued, so while a human
//     must act nothing automated is pending
//   - every queued action is re-checked against the live snapshot when
//     it fires; one decided against an older revision is dropped
// ═══════════════════════════════════════════════════════════════════════

use crate::config::TableConfig;
use crate::scheduler::{ActionQueue, ScheduledAction};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace, warn};
use twotwenty_agents::{make_agent, Agent, AgentKind};
use twotwenty_engine::engine::{self, Action};
use twotwenty_engine::error::RuleViolation;
use twotwenty_engine::setup;
use twotwenty_engine::types::*;
use twotwenty_engine::visibility::seat_view;

/// What happened when a queued action fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Applied { seat: SeatId, action: Action },
    /// Decided against an older revision; dropped without effect.
    Stale { seat: SeatId, action: Action },
    Rejected { seat: SeatId, action: Action, reason: RuleViolation },
}

pub struct Table {
    state: RoundState,
    agents: [Option<Box<dyn Agent>>; NUM_SEATS],
    queue: ActionQueue,
    clock_ms: u64,
    bot_delay_ms: u64,
    /// Policy used to reseat bots on `restart`; `None` keeps the given agents.
    agent_kind: Option<AgentKind>,
}

impl Table {
    /// Wrap a dealt round. `agents[i]` drives seat `i` when that seat is automated.
    pub fn new(state: RoundState, agents: [Option<Box<dyn Agent>>; NUM_SEATS], bot_delay_ms: u64) -> Self {
        let mut table = Table {
            state,
            agents,
            queue: ActionQueue::new(),
            clock_ms: 0,
            bot_delay_ms,
            agent_kind: None,
        };
        table.schedule_automated();
        table
    }

    /// Deal a round from `config` and seat one agent per automated seat.
    pub fn from_config(config: &TableConfig, seed: u64) -> Self {
        let state = setup::new_round(config.seats.clone(), config.bid_rules, seed);
        let agents = agents_for(&config.seats, config.agent, seed);
        let mut table = Self::new(state, agents, config.bot_delay_ms);
        table.agent_kind = Some(config.agent);
        table
    }

    /// Start a fresh round at the same table, discarding anything queued.
    /// Bots built from a config are reseated from `seed` as well, so the
    /// round plays out as `from_config` with that seed would.
    pub fn restart(&mut self, seed: u64) {
        let seats: [SeatSpec; NUM_SEATS] = std::array::from_fn(|i| {
            let seat = &self.state.seats[i];
            SeatSpec::new(&seat.id, &seat.name, seat.automated)
        });
        self.queue.clear();
        if let Some(kind) = self.agent_kind {
            self.agents = agents_for(&seats, kind, seed);
        }
        self.state = setup::new_round(seats, self.state.bid_rules, seed);
        info!(seed, "new round dealt");
        self.schedule_automated();
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn next_due(&self) -> Option<u64> {
        self.queue.next_due()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// The human seat whose input the round is waiting on, if any.
    pub fn awaiting_human(&self) -> Option<SeatId> {
        let seat = engine::acting_seat(&self.state)?;
        (!self.state.seat(seat).automated).then_some(seat)
    }

    /// Apply a human seat's action immediately.
    pub fn submit(&mut self, seat: SeatId, action: Action) -> Result<(), RuleViolation> {
        match engine::try_apply(&self.state, seat, action) {
            Ok(next) => {
                self.state = next;
                self.schedule_automated();
                Ok(())
            }
            Err(reason) => {
                debug!(%seat, ?action, %reason, "human action refused");
                Err(reason)
            }
        }
    }

    /// Jump the clock to the earliest queued action and fire it.
    pub fn step(&mut self) -> Option<StepOutcome> {
        let task = self.queue.pop_next()?;
        self.clock_ms = self.clock_ms.max(task.due_ms);
        Some(self.fire(task))
    }

    fn fire(&mut self, task: ScheduledAction) -> StepOutcome {
        let ScheduledAction { seat, action, revision, .. } = task;
        if revision != self.state.revision {
            debug!(%seat, ?action, scheduled = revision, current = self.state.revision, "stale action dropped");
            return StepOutcome::Stale { seat, action };
        }
        match engine::try_apply(&self.state, seat, action) {
            Ok(next) => {
                trace!(%seat, ?action, clock_ms = self.clock_ms, "automated action applied");
                self.state = next;
                self.schedule_automated();
                StepOutcome::Applied { seat, action }
            }
            Err(reason) => {
                warn!(%seat, ?action, %reason, "automated action refused");
                StepOutcome::Rejected { seat, action, reason }
            }
        }
    }

    /// Queue a decision for the seat on turn when it is automated and
    /// nothing is already queued for it at this revision.
    fn schedule_automated(&mut self) {
        let Some(seat) = engine::acting_seat(&self.state) else {
            return;
        };
        if !self.state.seat(seat).automated || self.queue.has_pending(seat, self.state.revision) {
            return;
        }
        let Some(agent) = self.agents[seat.index()].as_mut() else {
            warn!(%seat, "automated seat has no agent");
            return;
        };
        let view = seat_view(&self.state, seat);
        let Some(action) = agent.decide(&view) else {
            warn!(%seat, phase = %self.state.phase, agent = agent.name(), "agent had no decision");
            return;
        };
        let due = self.clock_ms + self.bot_delay_ms;
        trace!(%seat, ?action, due, "automated action queued");
        self.queue.schedule(due, seat, action, self.state.revision);
    }
}

/// One agent per automated seat, each with its own seed drawn from `seed`.
fn agents_for(seats: &[SeatSpec; NUM_SEATS], kind: AgentKind, seed: u64) -> [Option<Box<dyn Agent>>; NUM_SEATS] {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    std::array::from_fn(|i| {
        let agent_seed: u64 = rng.gen();
        seats[i].automated.then(|| make_agent(kind, SeatId(i as u8), agent_seed))
    })
}
