//! # Dragboard Core
//!
//! Drag-and-drop reconciliation for kanban boards.
//!
//! This crate turns pointer events over a board into optimistic board
//! projections and, on drop, a single authoritative move request. It has no
//! dependency on a specific UI toolkit; the persistence side is reached
//! through the [`Storage`] trait.

pub mod domain;
pub mod drag;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use domain::{
    board::{Board, BoardConfig, Column},
    card::{Card, CardId, ColumnId},
};
pub use drag::{
    Collisions, DragConfig, DragEngine, DragEvent, DragState, DropTarget, Effect, MoveRequest,
    MoveSink, OptimisticSink,
};
pub use error::{BoardError, Result};
pub use storage::Storage;
