use crate::domain::{Board, CardId, ColumnId};

/// Builds the tentative board shown while a card is dragged.
///
/// `card` is removed from its column in `baseline` and spliced into `target`
/// at `index`. Inputs are never mutated, so callers can diff against or roll
/// back to the baseline. Returns `None` when the card or the column is not on
/// the baseline.
pub fn project(baseline: &Board, card: &CardId, target: &ColumnId, index: usize) -> Option<Board> {
    baseline.with_move(card, target, index)
}
