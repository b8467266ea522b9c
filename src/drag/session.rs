use crate::domain::{CardId, ColumnId};
use crate::drag::collision::DropTarget;

/// State of one drag gesture, created on start and dropped on drop or cancel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    active: CardId,
    origin: ColumnId,
    origin_index: usize,
    over_droppable: bool,
    last_target: Option<DropTarget>,
}

impl DragSession {
    pub fn new(active: CardId, origin: ColumnId, origin_index: usize) -> Self {
        Self {
            active,
            origin,
            origin_index,
            over_droppable: false,
            last_target: None,
        }
    }

    /// The card being dragged
    pub fn active(&self) -> &CardId {
        &self.active
    }

    /// Column the card was in when the drag started
    pub fn origin(&self) -> &ColumnId {
        &self.origin
    }

    /// Index of the card in its origin column when the drag started
    pub fn origin_index(&self) -> usize {
        self.origin_index
    }

    pub fn is_over_droppable(&self) -> bool {
        self.over_droppable
    }

    /// Most recent resolved hover target, kept across pointer exits.
    ///
    /// Not used for drop resolution; callers read it to highlight the last
    /// droppable while the pointer is outside every surface.
    pub fn last_target(&self) -> Option<&DropTarget> {
        self.last_target.as_ref()
    }

    pub(crate) fn hover(&mut self, target: DropTarget) {
        self.over_droppable = true;
        self.last_target = Some(target);
    }

    pub(crate) fn leave(&mut self) {
        self.over_droppable = false;
    }
}
