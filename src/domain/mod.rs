pub mod board;
pub mod card;
pub mod ordering;

pub use board::{Board, BoardConfig, Column};
pub use card::{Card, CardId, ColumnId};
pub use ordering::{array_move, renumber, sort_by_position};
