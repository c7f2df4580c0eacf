//! The tiling store: the live rectangles plus the id counter.
//!
//! The store is the only owner of tiling state. Every mutation goes through
//! `split`, which removes the parent and inserts its children in one call, so
//! the partition and id-uniqueness invariants hold between any two calls.

use std::collections::BTreeMap;

use bevy::prelude::*;

use crate::config::{AREA_EPSILON, FIRST_CHILD_ID, ROOT_AREA, ROOT_ID};
use crate::randomness::{SplitRandomness, TilingRng};
use crate::rectangle::{Geometry, RectId, Rectangle};
use crate::split::{partition, SplitReport};
use crate::tiling_error::TilingError;

#[derive(Resource, Debug, Clone)]
pub struct TilingStore {
    rects: BTreeMap<RectId, Rectangle>,
    next_id: u32,
}

impl FromWorld for TilingStore {
    fn from_world(world: &mut World) -> Self {
        world.init_resource::<TilingRng>();
        let mut rng = world.resource_mut::<TilingRng>();
        Self::new(&mut *rng)
    }
}

impl TilingStore {
    /// A tiling holding only the root rectangle, colored from `rng`.
    pub fn new(rng: &mut impl SplitRandomness) -> Self {
        let root = Rectangle::root(RectId(ROOT_ID), rng.choose_color());
        let mut rects = BTreeMap::new();
        rects.insert(root.id, root);
        Self {
            rects,
            next_id: FIRST_CHILD_ID,
        }
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Replace rectangle `id` with 2 or 3 equal slices along a random axis.
    ///
    /// Returns `None` and leaves the store untouched (no id consumed, nothing
    /// drawn from `rng`) when `id` is not live. Also returns `None` with the
    /// tiling untouched once the `u32` id space cannot fit the children; the
    /// counter never wraps, so `u32::MAX` itself is never handed out.
    pub fn split(&mut self, id: RectId, rng: &mut impl SplitRandomness) -> Option<SplitReport> {
        if !self.rects.contains_key(&id) {
            return None;
        }

        let axis = rng.choose_axis();
        let fan_out = rng.choose_fan_out();
        let k = fan_out.count();

        let end = self.next_id.checked_add(k)?;
        let parent = self.rects.remove(&id)?;

        let ids: Vec<RectId> = (self.next_id..end).map(RectId).collect();
        self.next_id = end;
        let colors: Vec<_> = ids.iter().map(|_| rng.choose_color()).collect();

        let children = partition(&parent, axis, &ids, &colors);
        for child in children {
            self.rects.insert(child.id, child);
        }

        Some(SplitReport {
            parent: id,
            axis,
            fan_out,
            children: ids,
        })
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Live rectangles in ascending id order.
    pub fn list(&self) -> Vec<Rectangle> {
        self.rects.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rectangle> {
        self.rects.values()
    }

    pub fn get(&self, id: RectId) -> Option<&Rectangle> {
        self.rects.get(&id)
    }

    pub fn contains(&self, id: RectId) -> bool {
        self.rects.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// The id the next split's first child will receive.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// The rectangle under a point given in root percentages.
    pub fn rect_at(&self, px: f64, py: f64) -> Option<RectId> {
        self.rects
            .values()
            .find(|r| r.contains(px, py))
            .map(|r| r.id)
    }

    pub fn total_area(&self) -> f64 {
        self.rects.values().map(Rectangle::area).sum()
    }

    /// `(id, x, y, width, height)` of every live rectangle, ignoring color.
    pub fn geometries(&self) -> Vec<Geometry> {
        self.rects.values().map(Rectangle::geometry).collect()
    }

    // -----------------------------------------------------------------------
    // Invariant check
    // -----------------------------------------------------------------------

    /// Check every tiling invariant, returning the first violation found.
    ///
    /// The overlap check is pairwise, so this is meant for tests and
    /// debug builds rather than every frame of a release build.
    pub fn verify(&self) -> Result<(), TilingError> {
        for (&key, rect) in &self.rects {
            if key != rect.id {
                return Err(TilingError::KeyMismatch {
                    key,
                    stored: rect.id,
                });
            }
            if rect.id.0 == 0 || rect.id.0 >= self.next_id {
                return Err(TilingError::IdNotBelowCounter {
                    id: rect.id,
                    next_id: self.next_id,
                });
            }
            if rect.width <= 0.0 || rect.height <= 0.0 {
                return Err(TilingError::Degenerate(rect.id));
            }
            if !rect.within_root() {
                return Err(TilingError::OutOfBounds(rect.id));
            }
        }

        let found = self.total_area();
        if (found - ROOT_AREA).abs() > AREA_EPSILON {
            return Err(TilingError::AreaMismatch {
                expected: ROOT_AREA,
                found,
            });
        }

        let rects: Vec<&Rectangle> = self.rects.values().collect();
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                if a.overlaps(b) {
                    return Err(TilingError::Overlap(a.id, b.id));
                }
            }
        }

        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn insert_unchecked(&mut self, rect: Rectangle) {
        self.rects.insert(rect.id, rect);
    }
}
