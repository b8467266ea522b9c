use crate::domain::{Board, CardId, ColumnId};
use serde::{Deserialize, Serialize};

/// Final placement handed to the persistence layer after a drop
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    pub card_id: CardId,
    pub target_column: ColumnId,
    pub target_position: usize,
}

impl MoveRequest {
    pub fn new(card_id: CardId, target_column: ColumnId, target_position: usize) -> Self {
        Self {
            card_id,
            target_column,
            target_position,
        }
    }
}

/// Side effect requested by a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Display this board until superseded or reverted
    Project(Board),
    /// Discard any projection and show the baseline again
    Revert(Board),
    /// Persist the move; fire-and-forget
    Persist(MoveRequest),
}

/// Receives tentative boards for display during a drag
pub trait OptimisticSink {
    fn apply(&mut self, board: &Board);

    fn revert(&mut self, baseline: &Board);
}

/// Receives completed moves. Implementations must not block.
pub trait MoveSink {
    fn submit(&mut self, request: MoveRequest);
}

/// Sink that discards projections, for headless callers
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl OptimisticSink for NoopSink {
    fn apply(&mut self, _board: &Board) {}

    fn revert(&mut self, _baseline: &Board) {}
}
