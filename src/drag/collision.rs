use crate::domain::{CardId, ColumnId};
use crate::drag::config::DragConfig;
use crate::drag::geometry::Rect;
use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::{fmt, str::FromStr};
use tracing::trace;

/// A droppable surface the pointer can be over
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum DropTarget {
    /// A specific card; dropping here inserts relative to that card
    Card(CardId),
    /// Column space not covered by any card
    Column(ColumnId),
}

impl DropTarget {
    /// Prefix used by string-keyed UI layers for column droppables
    pub const COLUMN_PREFIX: &'static str = "column-";

    pub fn is_card(&self) -> bool {
        matches!(self, Self::Card(_))
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Self::Column(_))
    }
}

impl FromStr for DropTarget {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix(Self::COLUMN_PREFIX) {
            Some("") => Err(BoardError::InvalidDropTarget(s.to_string())),
            Some(column) => Ok(Self::Column(ColumnId::from(column))),
            None if s.is_empty() => Err(BoardError::InvalidDropTarget(s.to_string())),
            None => Ok(Self::Card(CardId::from(s))),
        }
    }
}

impl fmt::Display for DropTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Card(id) => write!(f, "{}", id),
            Self::Column(id) => write!(f, "{}{}", Self::COLUMN_PREFIX, id),
        }
    }
}

/// A registered droppable and its current on-screen rectangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Droppable {
    pub target: DropTarget,
    pub rect: Rect,
}

impl Droppable {
    pub fn new(target: DropTarget, rect: Rect) -> Self {
        Self { target, rect }
    }
}

/// Collision input for one pointer event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collisions {
    /// Droppables directly under the pointer, in hit-test order
    pub pointer: Vec<DropTarget>,
    /// All droppables with their rectangles, for the geometric fallback
    pub droppables: Vec<Droppable>,
    /// Rectangle of the dragged card
    pub active_rect: Option<Rect>,
}

impl Collisions {
    /// Collisions from pointer hits alone
    pub fn pointer(targets: Vec<DropTarget>) -> Self {
        Self {
            pointer: targets,
            ..Self::default()
        }
    }

    /// Pointer is over a single card
    pub fn over_card(card: impl Into<CardId>) -> Self {
        Self::pointer(vec![DropTarget::Card(card.into())])
    }

    /// Pointer is over empty column space
    pub fn over_column(column: impl Into<ColumnId>) -> Self {
        Self::pointer(vec![DropTarget::Column(column.into())])
    }

    /// Hit-tests a pointer position against every droppable
    pub fn at_point(x: f64, y: f64, droppables: Vec<Droppable>, active_rect: Option<Rect>) -> Self {
        Self {
            pointer: pointer_within(x, y, &droppables),
            droppables,
            active_rect,
        }
    }
}

/// Droppables whose rectangle contains the point, in registration order
pub fn pointer_within(x: f64, y: f64, droppables: &[Droppable]) -> Vec<DropTarget> {
    droppables
        .iter()
        .filter(|d| d.rect.contains(x, y))
        .map(|d| d.target.clone())
        .collect()
}

/// Picks the drop candidates for a pointer event.
///
/// Precedence is pointer exactness first, column space second and geometry
/// last:
/// 1. every card surface under the pointer;
/// 2. otherwise the first column surface under the pointer;
/// 3. otherwise droppables ranked by intersection ratio with the dragged
///    card's rectangle, so fast gestures that skip frames still land.
///
/// The first returned candidate is the winner. An empty result means no
/// resolvable target.
pub fn classify(collisions: &Collisions, config: &DragConfig) -> Vec<DropTarget> {
    let cards: Vec<DropTarget> = collisions
        .pointer
        .iter()
        .filter(|t| t.is_card())
        .cloned()
        .collect();
    if !cards.is_empty() {
        return cards;
    }

    if let Some(column) = collisions.pointer.iter().find(|t| t.is_column()) {
        return vec![column.clone()];
    }

    if !config.rect_fallback {
        return Vec::new();
    }
    let Some(active) = collisions.active_rect else {
        return Vec::new();
    };

    let mut ranked: Vec<(f64, &Droppable)> = collisions
        .droppables
        .iter()
        .map(|d| (active.intersection_ratio(&d.rect), d))
        .filter(|(ratio, _)| *ratio > config.min_intersection_ratio)
        .collect();
    ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    trace!(candidates = ranked.len(), "pointer missed, using rect intersection");

    ranked.into_iter().map(|(_, d)| d.target.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str) -> DropTarget {
        DropTarget::Card(CardId::from(id))
    }

    fn column(id: &str) -> DropTarget {
        DropTarget::Column(ColumnId::from(id))
    }

    #[test]
    fn test_card_surfaces_win_over_column() {
        let collisions = Collisions::pointer(vec![column("A"), card("card1"), card("card2")]);
        let result = classify(&collisions, &DragConfig::default());
        assert_eq!(result, vec![card("card1"), card("card2")]);
    }

    #[test]
    fn test_column_surface_when_no_cards() {
        let collisions = Collisions::pointer(vec![column("B"), column("C")]);
        let result = classify(&collisions, &DragConfig::default());
        assert_eq!(result, vec![column("B")]);
    }

    #[test]
    fn test_rect_fallback_ranks_by_overlap() {
        let collisions = Collisions {
            pointer: Vec::new(),
            droppables: vec![
                Droppable::new(column("A"), Rect::new(0.0, 0.0, 100.0, 400.0)),
                Droppable::new(card("card1"), Rect::new(0.0, 0.0, 100.0, 40.0)),
                Droppable::new(column("B"), Rect::new(500.0, 0.0, 100.0, 400.0)),
            ],
            active_rect: Some(Rect::new(0.0, 10.0, 100.0, 40.0)),
        };

        let result = classify(&collisions, &DragConfig::default());
        assert_eq!(result, vec![card("card1"), column("A")]);
    }

    #[test]
    fn test_rect_fallback_disabled() {
        let collisions = Collisions {
            pointer: Vec::new(),
            droppables: vec![Droppable::new(column("A"), Rect::new(0.0, 0.0, 10.0, 10.0))],
            active_rect: Some(Rect::new(0.0, 0.0, 10.0, 10.0)),
        };
        let config = DragConfig {
            rect_fallback: false,
            ..DragConfig::default()
        };

        assert!(classify(&collisions, &config).is_empty());
    }

    #[test]
    fn test_rect_fallback_respects_threshold() {
        let collisions = Collisions {
            pointer: Vec::new(),
            droppables: vec![Droppable::new(column("A"), Rect::new(0.0, 0.0, 10.0, 10.0))],
            active_rect: Some(Rect::new(9.0, 0.0, 10.0, 10.0)),
        };
        let config = DragConfig {
            min_intersection_ratio: 0.5,
            ..DragConfig::default()
        };

        assert!(classify(&collisions, &config).is_empty());
    }

    #[test]
    fn test_nothing_under_pointer_without_rect() {
        assert!(classify(&Collisions::default(), &DragConfig::default()).is_empty());
    }

    #[test]
    fn test_at_point_hit_tests_droppables() {
        let droppables = vec![
            Droppable::new(column("A"), Rect::new(0.0, 0.0, 100.0, 400.0)),
            Droppable::new(card("card1"), Rect::new(0.0, 0.0, 100.0, 40.0)),
        ];

        let over_card = Collisions::at_point(50.0, 20.0, droppables.clone(), None);
        assert_eq!(over_card.pointer, vec![column("A"), card("card1")]);
        assert_eq!(classify(&over_card, &DragConfig::default()), vec![card("card1")]);

        let below_cards = Collisions::at_point(50.0, 300.0, droppables, None);
        assert_eq!(classify(&below_cards, &DragConfig::default()), vec![column("A")]);
    }

    #[test]
    fn test_parse_drop_target() {
        assert_eq!("column-todo".parse::<DropTarget>().unwrap(), column("todo"));
        assert_eq!("card1".parse::<DropTarget>().unwrap(), card("card1"));
        assert!("column-".parse::<DropTarget>().is_err());
        assert!("".parse::<DropTarget>().is_err());
    }

    #[test]
    fn test_display_drop_target() {
        assert_eq!(column("todo").to_string(), "column-todo");
        assert_eq!(card("card1").to_string(), "card1");
    }

    #[test]
    fn test_drop_target_json_is_tagged() {
        let json = serde_json::to_string(&column("todo")).unwrap();
        assert_eq!(json, r#"{"kind":"column","id":"todo"}"#);
    }
}
