use crate::{
    domain::Board,
    drag::MoveRequest,
    error::{BoardError, Result},
};
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;
pub mod queue;

/// Storage trait for the authoritative board state
#[async_trait]
pub trait Storage: Send + Sync {
    /// Initializes the storage backend
    async fn initialize(&self) -> Result<()>;

    /// Saves the board state
    async fn save_board(&self, board: &Board) -> Result<()>;

    /// Loads the board state
    async fn load_board(&self) -> Result<Board>;

    /// Persists a card move and returns the updated board.
    /// Applying the same request twice leaves the order unchanged.
    async fn move_card(&self, request: &MoveRequest) -> Result<Board>;

    /// Checks if the board is initialized
    async fn is_initialized(&self) -> bool;
}

/// Applies a move to `board`, renumbering both affected columns
pub fn apply_move(board: &Board, request: &MoveRequest) -> Result<Board> {
    if board.card(&request.card_id).is_none() {
        return Err(BoardError::CardNotFound(request.card_id.to_string()));
    }
    if !board.has_column(&request.target_column) {
        return Err(BoardError::ColumnNotFound(request.target_column.to_string()));
    }

    let mut moved = board
        .with_move(
            &request.card_id,
            &request.target_column,
            request.target_position,
        )
        .ok_or_else(|| BoardError::StorageError(format!("could not move {}", request.card_id)))?;

    if let Some(card) = moved.card_mut(&request.card_id) {
        card.touch();
    }

    Ok(moved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(board: &Board) -> Vec<Vec<String>> {
        board
            .columns
            .iter()
            .map(|col| col.cards.iter().map(|c| c.id.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_apply_move_is_idempotent() {
        let board = Board::from_layout(&[("A", &["card1", "card2", "card3"]), ("B", &[])]);
        let request = MoveRequest::new("card3".into(), "A".into(), 0);

        let once = apply_move(&board, &request).unwrap();
        let twice = apply_move(&once, &request).unwrap();

        assert_eq!(order(&once), order(&twice));
        assert_eq!(order(&once)[0], vec!["card3", "card1", "card2"]);
        assert!(twice.validate().is_ok());
    }

    #[test]
    fn test_apply_move_unknown_card() {
        let board = Board::from_layout(&[("A", &["card1"])]);
        let request = MoveRequest::new("ghost".into(), "A".into(), 0);

        assert!(matches!(
            apply_move(&board, &request),
            Err(BoardError::CardNotFound(id)) if id == "ghost"
        ));
    }

    #[test]
    fn test_apply_move_unknown_column() {
        let board = Board::from_layout(&[("A", &["card1"])]);
        let request = MoveRequest::new("card1".into(), "gone".into(), 0);

        assert!(matches!(
            apply_move(&board, &request),
            Err(BoardError::ColumnNotFound(id)) if id == "gone"
        ));
    }
}
