use crate::domain::card::Card;

/// Moves the element at `from` to `to`, shifting the elements in between.
///
/// Mirrors the usual sortable-list "array move": the element is removed first
/// and then reinserted, so `to` is an index into the resulting sequence.
/// Out-of-range indices are clamped to the last slot.
///
/// # Examples
/// ```
/// use dragboard_core::domain::ordering::array_move;
///
/// let moved = array_move(&["a", "b", "c"], 2, 0);
/// assert_eq!(moved, vec!["c", "a", "b"]);
/// ```
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = items.to_vec();
    if out.is_empty() {
        return out;
    }

    let last = out.len() - 1;
    let item = out.remove(from.min(last));
    out.insert(to.min(last), item);
    out
}

/// Rewrites each card's position to its index in the slice
pub fn renumber(cards: &mut [Card]) {
    for (index, card) in cards.iter_mut().enumerate() {
        card.position = index;
    }
}

/// Sorts cards by their stored position, breaking ties by ID.
///
/// Used when a board arrives from a store whose rows are not guaranteed to
/// be in position order.
pub fn sort_by_position(cards: &mut [Card]) {
    cards.sort_by(|a, b| {
        a.position
            .cmp(&b.position)
            .then_with(|| a.id.as_str().cmp(b.id.as_str()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::{CardId, ColumnId};

    fn card(id: &str, position: usize) -> Card {
        Card::new(CardId::from(id), ColumnId::from("col"), position, id.to_string())
    }

    #[test]
    fn test_array_move_forward() {
        assert_eq!(array_move(&[1, 2, 3, 4], 0, 2), vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_array_move_backward() {
        assert_eq!(array_move(&[1, 2, 3, 4], 3, 1), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_array_move_same_index_is_identity() {
        assert_eq!(array_move(&[1, 2, 3], 1, 1), vec![1, 2, 3]);
    }

    #[test]
    fn test_array_move_clamps_out_of_range() {
        assert_eq!(array_move(&[1, 2, 3], 0, 10), vec![2, 3, 1]);
        assert!(array_move::<u8>(&[], 0, 0).is_empty());
    }

    #[test]
    fn test_renumber_makes_positions_dense() {
        let mut cards = vec![card("a", 4), card("b", 9), card("c", 0)];
        renumber(&mut cards);

        let positions: Vec<usize> = cards.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_sort_by_position_breaks_ties_by_id() {
        let mut cards = vec![card("b", 1), card("c", 0), card("a", 1)];
        sort_by_position(&mut cards);

        let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
