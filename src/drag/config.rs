use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};

/// Tuning for collision classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Fall back to rectangle intersection when the pointer is over nothing
    pub rect_fallback: bool,
    /// Candidates at or below this intersection ratio are ignored by the fallback
    pub min_intersection_ratio: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            rect_fallback: true,
            min_intersection_ratio: 0.0,
        }
    }
}

impl DragConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.min_intersection_ratio) {
            return Err(BoardError::ConfigError(format!(
                "min_intersection_ratio must be in [0, 1), got {}",
                self.min_intersection_ratio
            )));
        }
        Ok(())
    }
}
