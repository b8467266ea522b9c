use crate::{
    domain::Board,
    drag::MoveRequest,
    error::{BoardError, Result},
    storage::{apply_move, Storage},
};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-memory storage, mainly for tests and embedded use
#[derive(Debug, Default)]
pub struct MemoryStorage {
    board: RwLock<Option<Board>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage already holding `board`
    pub fn with_board(board: Board) -> Self {
        Self {
            board: RwLock::new(Some(board)),
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn initialize(&self) -> Result<()> {
        let mut board = self.board.write().await;
        if board.is_none() {
            *board = Some(Board::default());
        }
        Ok(())
    }

    async fn save_board(&self, board: &Board) -> Result<()> {
        board.validate()?;
        *self.board.write().await = Some(board.clone());
        Ok(())
    }

    async fn load_board(&self) -> Result<Board> {
        self.board
            .read()
            .await
            .clone()
            .ok_or(BoardError::BoardNotInitialized)
    }

    async fn move_card(&self, request: &MoveRequest) -> Result<Board> {
        let mut guard = self.board.write().await;
        let current = guard.as_ref().ok_or(BoardError::BoardNotInitialized)?;

        let moved = apply_move(current, request)?;
        *guard = Some(moved.clone());
        Ok(moved)
    }

    async fn is_initialized(&self) -> bool {
        self.board.read().await.is_some()
    }
}
