//! Drag state machine.
//!
//! [`DragState`] is either `Idle` or `Active`. Every transition consumes the
//! current state and returns the next one together with the effects the
//! caller should carry out, so the machine can be driven and tested without a
//! UI.
//!
//! # Invariants
//!
//! 1. The baseline captured at start is never modified during the session.
//! 2. The live board is rebuilt from the baseline on every hover that changes
//!    the card's column; repeated hovers over the same target emit nothing.
//! 3. Drop and cancel always return to `Idle`.
//! 4. At most one `Persist` effect is emitted per session, and none for a
//!    cancelled, unresolved or no-op drop.
//! 5. Same-column drop positions are computed against the baseline, never
//!    against the projected board.

use crate::domain::{array_move, Board, CardId, ColumnId};
use crate::drag::collision::{classify, Collisions, DropTarget};
use crate::drag::config::DragConfig;
use crate::drag::effects::{Effect, MoveRequest};
use crate::drag::projector::project;
use crate::drag::session::DragSession;
use tracing::debug;

/// Input to the state machine
#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent {
    /// Pointer picked up `card`; `board` becomes the baseline snapshot
    Start { card: CardId, board: Board },
    /// Pointer moved while dragging
    Move(Collisions),
    /// Pointer released
    Drop(Collisions),
    /// Gesture aborted
    Cancel,
}

/// Data owned by an active drag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDrag {
    session: DragSession,
    baseline: Board,
    live: Board,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Active(Box<ActiveDrag>),
}

/// Result of a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: DragState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn idle(effects: Vec<Effect>) -> Self {
        Self {
            state: DragState::Idle,
            effects,
        }
    }
}

impl DragState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    pub fn active(&self) -> Option<&ActiveDrag> {
        match self {
            Self::Active(drag) => Some(drag),
            Self::Idle => None,
        }
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.active().map(ActiveDrag::session)
    }

    pub fn transition(self, event: DragEvent, config: &DragConfig) -> Transition {
        match event {
            DragEvent::Start { card, board } => self.start(card, board),
            DragEvent::Move(collisions) => self.hover(&collisions, config),
            DragEvent::Drop(collisions) => self.drop(&collisions, config),
            DragEvent::Cancel => self.cancel(),
        }
    }

    fn start(self, card: CardId, board: Board) -> Transition {
        let mut effects = Vec::new();

        // A second start while active means we missed the end of the last
        // gesture; treat it as cancelled.
        if let Self::Active(previous) = self {
            debug!(card = %previous.session.active(), "drag restarted while active, cancelling");
            effects.push(Effect::Revert(previous.baseline));
        }

        let Some((origin, index)) = board.card_index(&card) else {
            debug!(card = %card, "drag start on unknown card ignored");
            return Transition::idle(effects);
        };

        debug!(card = %card, origin = %origin, index, "drag started");
        let drag = ActiveDrag {
            session: DragSession::new(card, origin, index),
            live: board.clone(),
            baseline: board,
        };

        Transition {
            state: Self::Active(Box::new(drag)),
            effects,
        }
    }

    fn hover(self, collisions: &Collisions, config: &DragConfig) -> Transition {
        match self {
            Self::Active(mut drag) => {
                let effects = drag.hover(collisions, config);
                Transition {
                    state: Self::Active(drag),
                    effects,
                }
            }
            Self::Idle => Transition::idle(Vec::new()),
        }
    }

    fn drop(self, collisions: &Collisions, config: &DragConfig) -> Transition {
        match self {
            Self::Active(drag) => Transition::idle(drag.finish(collisions, config)),
            Self::Idle => Transition::idle(Vec::new()),
        }
    }

    fn cancel(self) -> Transition {
        match self {
            Self::Active(drag) => {
                debug!(card = %drag.session.active(), "drag cancelled");
                Transition::idle(vec![Effect::Revert(drag.baseline)])
            }
            Self::Idle => Transition::idle(Vec::new()),
        }
    }
}

impl ActiveDrag {
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Snapshot captured at drag start
    pub fn baseline(&self) -> &Board {
        &self.baseline
    }

    /// Board as currently projected
    pub fn live(&self) -> &Board {
        &self.live
    }

    /// Column of the winning candidate, resolved against the live board
    fn resolve(&self, collisions: &Collisions, config: &DragConfig) -> Option<(DropTarget, ColumnId)> {
        let winner = classify(collisions, config).into_iter().next()?;
        let column = match &winner {
            DropTarget::Column(id) => self.live.column(id)?.id.clone(),
            DropTarget::Card(id) => self.live.locate_column(id)?.id.clone(),
        };
        Some((winner, column))
    }

    /// Insertion index in a column other than the origin.
    ///
    /// The baseline copy of that column never holds the dragged card, so a
    /// card surface means "before that card" and column space means append.
    fn cross_column_index(&self, winner: &DropTarget, target: &ColumnId) -> Option<usize> {
        let column = self.baseline.column(target)?;
        match winner {
            DropTarget::Card(id) if id == self.session.active() => {
                self.live.column(target)?.index_of(id)
            }
            DropTarget::Card(id) => Some(column.index_of(id).unwrap_or(column.len())),
            DropTarget::Column(_) => Some(column.len()),
        }
    }

    fn hover(&mut self, collisions: &Collisions, config: &DragConfig) -> Vec<Effect> {
        let Some((winner, target)) = self.resolve(collisions, config) else {
            self.session.leave();
            return Vec::new();
        };
        self.session.hover(winner.clone());

        let current = self
            .live
            .locate_column(self.session.active())
            .map(|col| col.id.clone());
        if current.as_ref() == Some(&target) {
            return Vec::new();
        }

        let next = if &target == self.session.origin() {
            Some(self.baseline.clone())
        } else {
            self.cross_column_index(&winner, &target)
                .and_then(|index| project(&self.baseline, self.session.active(), &target, index))
        };

        match next {
            Some(board) => {
                debug!(card = %self.session.active(), column = %target, "projected hover");
                self.live = board.clone();
                vec![Effect::Project(board)]
            }
            None => {
                self.session.leave();
                Vec::new()
            }
        }
    }

    fn finish(self, collisions: &Collisions, config: &DragConfig) -> Vec<Effect> {
        let Some(request) = self.settle(collisions, config) else {
            return vec![Effect::Revert(self.baseline)];
        };

        match project(
            &self.baseline,
            &request.card_id,
            &request.target_column,
            request.target_position,
        ) {
            Some(board) => {
                debug!(
                    card = %request.card_id,
                    column = %request.target_column,
                    position = request.target_position,
                    "drop resolved"
                );
                vec![Effect::Project(board), Effect::Persist(request)]
            }
            None => vec![Effect::Revert(self.baseline)],
        }
    }

    /// Final placement for a drop, or `None` when nothing should be persisted
    fn settle(&self, collisions: &Collisions, config: &DragConfig) -> Option<MoveRequest> {
        let Some((winner, target)) = self.resolve(collisions, config) else {
            debug!(card = %self.session.active(), "drop outside any droppable");
            return None;
        };
        let active = self.session.active();

        if &target != self.session.origin() {
            let position = self.cross_column_index(&winner, &target)?;
            return Some(MoveRequest::new(active.clone(), target, position));
        }

        let column = self.baseline.column(&target)?;
        let from = self.session.origin_index();
        let to = match &winner {
            DropTarget::Card(id) => column.index_of(id).unwrap_or(from),
            DropTarget::Column(_) => column.len().saturating_sub(1),
        };

        let reordered = array_move(&column.card_ids(), from, to);
        let position = reordered
            .iter()
            .position(|id| *id == active)
            .unwrap_or(from);

        if position == from {
            debug!(card = %active, position, "drop on original slot, nothing to persist");
            return None;
        }

        Some(MoveRequest::new(active.clone(), target, position))
    }
}
