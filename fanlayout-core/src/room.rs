//! Room geometry
//!
//! A cuboid room described by its ceiling height and floor dimensions, all
//! in metres. The model is immutable and accepts any number; use
//! [`RoomModel::validate`] to reject non-positive sizes up front.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, DesignResult};

/// Immutable description of the space to be served by fans
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoomModel {
    /// Floor-to-ceiling height (m)
    pub ceiling_height: f64,
    /// Floor dimension along the X axis (m)
    pub size_x: f64,
    /// Floor dimension along the Y axis (m)
    pub size_y: f64,
}

impl RoomModel {
    /// Create a room from ceiling height and floor dimensions
    pub fn new(ceiling_height: f64, size_x: f64, size_y: f64) -> Self {
        Self {
            ceiling_height,
            size_x,
            size_y,
        }
    }

    /// Floor area (m²)
    pub fn area(&self) -> f64 {
        self.size_x * self.size_y
    }

    /// Reject rooms with non-positive or non-finite dimensions.
    pub fn validate(&self) -> DesignResult<()> {
        require_positive("ceiling_height", self.ceiling_height)?;
        require_positive("size_x", self.size_x)?;
        require_positive("size_y", self.size_y)?;
        Ok(())
    }
}
