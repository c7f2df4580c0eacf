//! The rectangle entity and its geometry helpers.
//!
//! All coordinates are percentages of the root square, so `(0, 0)` is the
//! top-left corner of the viewport and `(100, 100)` the bottom-right.

use std::fmt;

use bevy::color::{ColorToPacked, Srgba};

use crate::config::{AREA_EPSILON, ROOT_EXTENT};

/// Identifier of a live rectangle. Handed out by `TilingStore` and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RectId(pub u32);

impl fmt::Display for RectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Geometry of a rectangle without its color, used when comparing tilings.
pub type Geometry = (RectId, f64, f64, f64, f64);

/// One tile of the tiling. Immutable after creation: a split removes it and
/// inserts fresh children rather than editing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub id: RectId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Srgba,
}

impl Rectangle {
    /// The full-area rectangle the tiling starts from.
    pub fn root(id: RectId, color: Srgba) -> Self {
        Self {
            id,
            x: 0.0,
            y: 0.0,
            width: ROOT_EXTENT,
            height: ROOT_EXTENT,
            color,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn geometry(&self) -> Geometry {
        (self.id, self.x, self.y, self.width, self.height)
    }

    /// Whether the point lies inside this rectangle.
    ///
    /// Edges are half-open so a point on a shared edge belongs to exactly one
    /// tile. The root's far edges are the exception: a point at exactly 100%
    /// still hits the tile touching that edge.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        let in_x = px >= self.x
            && (px < self.right() || (touches_far_edge(self.right()) && px <= ROOT_EXTENT));
        let in_y = py >= self.y
            && (py < self.bottom() || (touches_far_edge(self.bottom()) && py <= ROOT_EXTENT));
        in_x && in_y
    }

    /// Whether the interiors of the two rectangles intersect with positive area.
    /// Rectangles sharing only an edge do not overlap.
    pub fn overlaps(&self, other: &Rectangle) -> bool {
        let overlap_w = self.right().min(other.right()) - self.x.max(other.x);
        let overlap_h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        overlap_w > AREA_EPSILON && overlap_h > AREA_EPSILON
    }

    /// Whether the rectangle lies within the root square, within tolerance.
    pub fn within_root(&self) -> bool {
        self.x >= -AREA_EPSILON
            && self.y >= -AREA_EPSILON
            && self.right() <= ROOT_EXTENT + AREA_EPSILON
            && self.bottom() <= ROOT_EXTENT + AREA_EPSILON
    }

    /// `#RRGGBB` form of the display color, for logs.
    pub fn color_hex(&self) -> String {
        let [r, g, b, _] = self.color.to_u8_array();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

fn touches_far_edge(edge: f64) -> bool {
    (edge - ROOT_EXTENT).abs() <= AREA_EPSILON
}
