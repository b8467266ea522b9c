use crate::domain::{Board, CardId};
use crate::drag::collision::Collisions;
use crate::drag::config::DragConfig;
use crate::drag::effects::{Effect, MoveSink, OptimisticSink};
use crate::drag::machine::{DragEvent, DragState, Transition};
use crate::drag::session::DragSession;

/// Drives a [`DragState`] from pointer events and dispatches its effects.
///
/// All methods are synchronous and never fail; anything the engine cannot
/// resolve simply produces no move.
pub struct DragEngine<S, M> {
    state: DragState,
    config: DragConfig,
    optimistic: S,
    moves: M,
}

impl<S: OptimisticSink, M: MoveSink> DragEngine<S, M> {
    pub fn new(optimistic: S, moves: M) -> Self {
        Self::with_config(DragConfig::default(), optimistic, moves)
    }

    pub fn with_config(config: DragConfig, optimistic: S, moves: M) -> Self {
        Self {
            state: DragState::Idle,
            config,
            optimistic,
            moves,
        }
    }

    pub fn start(&mut self, card: CardId, board: Board) {
        self.handle(DragEvent::Start { card, board });
    }

    pub fn hover(&mut self, collisions: Collisions) {
        self.handle(DragEvent::Move(collisions));
    }

    pub fn drop(&mut self, collisions: Collisions) {
        self.handle(DragEvent::Drop(collisions));
    }

    pub fn cancel(&mut self) {
        self.handle(DragEvent::Cancel);
    }

    pub fn handle(&mut self, event: DragEvent) {
        let state = std::mem::take(&mut self.state);
        let Transition { state, effects } = state.transition(event, &self.config);
        self.state = state;

        for effect in effects {
            match effect {
                Effect::Project(board) => self.optimistic.apply(&board),
                Effect::Revert(baseline) => self.optimistic.revert(&baseline),
                Effect::Persist(request) => self.moves.submit(request),
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.state.session()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    pub fn optimistic(&self) -> &S {
        &self.optimistic
    }

    pub fn moves(&self) -> &M {
        &self.moves
    }

    pub fn into_parts(self) -> (S, M) {
        (self.optimistic, self.moves)
    }
}
