//! Axis-aligned geometry for the playfield and entity bounding boxes
//!
//! Bounding boxes are never stored on entities. They are derived on demand
//! from the current position and the fixed dimensions of the entity's kind,
//! centered on the position.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Fixed width/height shared by every entity of one kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KindDims {
    pub width: f64,
    pub height: f64,
}

impl KindDims {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Half extents as a vector
    #[inline]
    pub fn half(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// The rectangular world the simulation runs in, spanning `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
}

impl Playfield {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Inclusive containment; NaN coordinates are never contained
    pub fn contains(&self, pos: DVec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }

    /// Whether the horizontal coordinate has left `[0, width]`
    #[inline]
    pub fn outside_x(&self, x: f64) -> bool {
        x < 0.0 || x > self.width
    }

    /// Whether the vertical coordinate has left `[0, height]`
    #[inline]
    pub fn outside_y(&self, y: f64) -> bool {
        y < 0.0 || y > self.height
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec2,
    pub max: DVec2,
}

impl Aabb {
    /// Box of the given dimensions centered on `center`
    pub fn centered(center: DVec2, dims: KindDims) -> Self {
        let half = dims.half();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Box around an entity's current position
    #[inline]
    pub fn of(entity: &Entity, dims: KindDims) -> Self {
        Self::centered(entity.pos, dims)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Strict overlap test.
    ///
    /// Both the X and Y intervals must share a range of positive length.
    /// Boxes that only touch along an edge or at a corner do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}
