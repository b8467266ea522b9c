use crate::domain::card::{Card, CardId, ColumnId};
use crate::domain::ordering::{renumber, sort_by_position};
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A board column holding an ordered sequence of cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub cards: Vec<Card>,
}

impl Column {
    pub fn new(id: ColumnId, title: String) -> Self {
        Self {
            id,
            title,
            cards: Vec::new(),
        }
    }

    /// Appends a new card at the end of the column
    pub fn push_card(&mut self, id: CardId, title: String) -> &Card {
        let position = self.cards.len();
        self.cards
            .push(Card::new(id, self.id.clone(), position, title));
        &self.cards[position]
    }

    /// Index of the card in this column's sequence
    pub fn index_of(&self, card: &CardId) -> Option<usize> {
        self.cards.iter().position(|c| &c.id == card)
    }

    pub fn contains(&self, card: &CardId) -> bool {
        self.index_of(card).is_some()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card IDs in display order
    pub fn card_ids(&self) -> Vec<&CardId> {
        self.cards.iter().map(|c| &c.id).collect()
    }
}

/// Board configuration used to create an empty board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Default Board".to_string(),
            columns: vec![
                "Backlog".to_string(),
                "Todo".to_string(),
                "In Progress".to_string(),
                "Done".to_string(),
            ],
        }
    }
}

/// Kanban board state: an ordered set of columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Board {
    pub fn new(name: String, columns: Vec<Column>) -> Self {
        Self { name, columns }
    }

    /// Creates an empty board with one generated column per configured title
    pub fn from_config(config: &BoardConfig) -> Self {
        let columns = config
            .columns
            .iter()
            .map(|title| Column::new(ColumnId::generate(), title.clone()))
            .collect();
        Self::new(config.name.clone(), columns)
    }

    /// Builds a board from `(column id, [card ids])` pairs.
    ///
    /// Titles default to the identifiers. Handy for fixtures and for callers
    /// that already hold the layout as plain strings.
    pub fn from_layout(layout: &[(&str, &[&str])]) -> Self {
        let columns = layout
            .iter()
            .map(|(column_id, card_ids)| {
                let mut column = Column::new(ColumnId::from(*column_id), column_id.to_string());
                for card_id in card_ids.iter() {
                    column.push_card(CardId::from(*card_id), card_id.to_string());
                }
                column
            })
            .collect();
        Self::new("Board".to_string(), columns)
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|col| &col.id == id)
    }

    pub fn column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|col| &col.id == id)
    }

    pub fn has_column(&self, id: &ColumnId) -> bool {
        self.column(id).is_some()
    }

    /// Finds the column currently holding `card`.
    ///
    /// Absence is a normal answer: the card may just have been removed by a
    /// concurrent optimistic update.
    pub fn locate_column(&self, card: &CardId) -> Option<&Column> {
        self.columns.iter().find(|col| col.contains(card))
    }

    /// Column ID and index of `card`
    pub fn card_index(&self, card: &CardId) -> Option<(ColumnId, usize)> {
        self.columns
            .iter()
            .find_map(|col| col.index_of(card).map(|index| (col.id.clone(), index)))
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.columns
            .iter()
            .flat_map(|col| col.cards.iter())
            .find(|c| &c.id == id)
    }

    pub fn card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.columns
            .iter_mut()
            .flat_map(|col| col.cards.iter_mut())
            .find(|c| &c.id == id)
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Checks the structural invariants of a consistent snapshot
    pub fn validate(&self) -> Result<()> {
        let mut column_ids = HashSet::new();
        let mut card_ids = HashSet::new();

        for column in &self.columns {
            if !column_ids.insert(&column.id) {
                return Err(BoardError::DuplicateColumn(column.id.to_string()));
            }

            for (index, card) in column.cards.iter().enumerate() {
                if !card_ids.insert(&card.id) {
                    return Err(BoardError::DuplicateCard(card.id.to_string()));
                }
                if card.column_id != column.id {
                    return Err(BoardError::ColumnMismatch {
                        card: card.id.to_string(),
                        stored: column.id.to_string(),
                        claimed: card.column_id.to_string(),
                    });
                }
                if card.position != index {
                    return Err(BoardError::PositionMismatch {
                        card: card.id.to_string(),
                        expected: index,
                        found: card.position,
                    });
                }
            }
        }

        Ok(())
    }

    /// Re-sorts every column by stored position and makes positions dense
    pub fn normalize(&mut self) {
        for column in &mut self.columns {
            sort_by_position(&mut column.cards);
            renumber(&mut column.cards);
            for card in &mut column.cards {
                card.column_id = column.id.clone();
            }
        }
    }

    /// Returns a copy of the board with `card` moved to `index` in `target`.
    ///
    /// The card is removed from its source column first, then spliced into the
    /// target at `index` (clamped to the target's length). Both affected
    /// columns are renumbered. `None` when the card or target column is absent.
    pub fn with_move(&self, card: &CardId, target: &ColumnId, index: usize) -> Option<Board> {
        let (source, from) = self.card_index(card)?;
        if !self.has_column(target) {
            return None;
        }

        let mut board = self.clone();

        let source_column = board.column_mut(&source)?;
        let mut moved = source_column.cards.remove(from);
        renumber(&mut source_column.cards);

        let target_column = board.column_mut(target)?;
        moved.column_id = target.clone();
        let index = index.min(target_column.cards.len());
        target_column.cards.insert(index, moved);
        renumber(&mut target_column.cards);

        Some(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_config(&BoardConfig::default())
    }
}
