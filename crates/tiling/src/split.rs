//! One-axis partitioning of a rectangle into equal slices.
//!
//! A split never cuts along both axes at once, so partitioning a parent is a
//! 1-D problem: the perpendicular extent is copied and the split extent is
//! divided into `k` contiguous slices starting at the parent's origin.

use std::fmt;

use bevy::color::Srgba;

use crate::rectangle::{RectId, Rectangle};

/// Direction children are stacked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitAxis {
    /// Children stacked top to bottom, each keeping the parent's full width.
    Horizontal,
    /// Children laid out left to right, each keeping the parent's full height.
    Vertical,
}

impl fmt::Display for SplitAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitAxis::Horizontal => write!(f, "horizontal"),
            SplitAxis::Vertical => write!(f, "vertical"),
        }
    }
}

/// Number of children a split produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FanOut {
    Two,
    Three,
}

impl FanOut {
    pub fn count(self) -> u32 {
        match self {
            FanOut::Two => 2,
            FanOut::Three => 3,
        }
    }
}

/// Summary of one effective split, returned by `TilingStore::split` and
/// forwarded to listeners through `TilingChanged`.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitReport {
    pub parent: RectId,
    pub axis: SplitAxis,
    pub fan_out: FanOut,
    /// Child ids in slice order (increasing coordinate along `axis`).
    pub children: Vec<RectId>,
}

/// Slice `parent` into `ids.len()` equal pieces along `axis`.
///
/// Child `i` takes `ids[i]` and `colors[i]`; the two slices must have the
/// same length.
pub fn partition(
    parent: &Rectangle,
    axis: SplitAxis,
    ids: &[RectId],
    colors: &[Srgba],
) -> Vec<Rectangle> {
    debug_assert_eq!(ids.len(), colors.len());
    let k = ids.len() as f64;

    ids.iter()
        .zip(colors)
        .enumerate()
        .map(|(i, (&id, &color))| {
            let offset = i as f64;
            match axis {
                SplitAxis::Horizontal => {
                    let step = parent.height / k;
                    Rectangle {
                        id,
                        x: parent.x,
                        y: parent.y + offset * step,
                        width: parent.width,
                        height: step,
                        color,
                    }
                }
                SplitAxis::Vertical => {
                    let step = parent.width / k;
                    Rectangle {
                        id,
                        x: parent.x + offset * step,
                        y: parent.y,
                        width: step,
                        height: parent.height,
                        color,
                    }
                }
            }
        })
        .collect()
}
