//! Drag-and-drop reconciliation for board cards.
//!
//! Pointer events flow through the collision classifier into the state
//! machine, which projects tentative boards while hovering and computes the
//! final placement on drop.

pub mod collision;
pub mod config;
pub mod effects;
pub mod engine;
pub mod geometry;
pub mod machine;
pub mod projector;
pub mod session;

pub use collision::{classify, pointer_within, Collisions, DropTarget, Droppable};
pub use config::DragConfig;
pub use effects::{Effect, MoveRequest, MoveSink, NoopSink, OptimisticSink};
pub use engine::DragEngine;
pub use geometry::Rect;
pub use machine::{ActiveDrag, DragEvent, DragState, Transition};
pub use projector::project;
pub use session::DragSession;
