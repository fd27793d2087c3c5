// ═══════════════════════════════════════════════════════════════════════
// Deferred actions on a logical clock
//
// Automated seats do not act the moment it becomes their turn. Their
// decision is queued with a due time and applied once the clock reaches
// it. A queued action remembers the round revision it was decided
// against; by the time it fires the round may have moved on, so the
// table re-checks it against the live snapshot before applying.
// ═══════════════════════════════════════════════════════════════════════

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use twotwenty_engine::engine::Action;
use twotwenty_engine::types::SeatId;

/// One queued automated decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledAction {
    pub due_ms: u64,
    pub seat: SeatId,
    pub action: Action,
    /// `RoundState::revision` the decision was made against.
    pub revision: u64,
    seq: u64,
}

impl Ord for ScheduledAction {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due_ms, self.seq).cmp(&(other.due_ms, other.seq))
    }
}

impl PartialOrd for ScheduledAction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-queue of scheduled actions. Equal due times pop in insertion order.
#[derive(Debug, Default)]
pub struct ActionQueue {
    heap: BinaryHeap<Reverse<ScheduledAction>>,
    next_seq: u64,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: u64, seat: SeatId, action: Action, revision: u64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(ScheduledAction { due_ms, seat, action, revision, seq }));
    }

    /// Due time of the earliest queued action.
    pub fn next_due(&self) -> Option<u64> {
        self.heap.peek().map(|Reverse(a)| a.due_ms)
    }

    /// Pop the earliest action. The caller owns the clock.
    pub fn pop_next(&mut self) -> Option<ScheduledAction> {
        self.heap.pop().map(|Reverse(a)| a)
    }

    pub fn has_pending(&self, seat: SeatId, revision: u64) -> bool {
        self.heap.iter().any(|Reverse(a)| a.seat == seat && a.revision == revision)
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
