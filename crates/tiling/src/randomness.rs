//! Randomness behind every split.
//!
//! Axis, fan-out and color choices all go through the `SplitRandomness`
//! trait so tests can force specific branches. The `TilingRng` resource holds
//! the active source; production uses `SeededRandomness`, which wraps
//! `ChaCha8Rng` so a fixed seed replays the same session on every platform.

use std::collections::VecDeque;

use bevy::color::Srgba;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::DEFAULT_SEED;
use crate::split::{FanOut, SplitAxis};

/// Source of the three random decisions a split makes.
pub trait SplitRandomness {
    /// Horizontal or vertical, 50/50.
    fn choose_axis(&mut self) -> SplitAxis;
    /// Two or three children, 50/50.
    fn choose_fan_out(&mut self) -> FanOut;
    /// Opaque display color with each channel drawn uniformly.
    fn choose_color(&mut self) -> Srgba;
}

// ---------------------------------------------------------------------------
// Seeded source
// ---------------------------------------------------------------------------

/// `ChaCha8Rng`-backed source used by the running app.
pub struct SeededRandomness(pub ChaCha8Rng);

impl SeededRandomness {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Seed from OS entropy; sessions are not reproducible.
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}

impl SplitRandomness for SeededRandomness {
    fn choose_axis(&mut self) -> SplitAxis {
        if self.0.gen_bool(0.5) {
            SplitAxis::Horizontal
        } else {
            SplitAxis::Vertical
        }
    }

    fn choose_fan_out(&mut self) -> FanOut {
        if self.0.gen_bool(0.5) {
            FanOut::Two
        } else {
            FanOut::Three
        }
    }

    fn choose_color(&mut self) -> Srgba {
        Srgba::rgb_u8(self.0.gen(), self.0.gen(), self.0.gen())
    }
}

// ---------------------------------------------------------------------------
// Scripted source
// ---------------------------------------------------------------------------

const SCRIPTED_PALETTE: [Srgba; 4] = [
    Srgba::rgb(0.9, 0.3, 0.3),
    Srgba::rgb(0.3, 0.7, 0.4),
    Srgba::rgb(0.3, 0.4, 0.9),
    Srgba::rgb(0.9, 0.8, 0.2),
];

/// Deterministic source that replays queued decisions.
///
/// An exhausted axis queue yields `Vertical` and an exhausted fan-out queue
/// yields `Two`. Colors cycle through a fixed palette.
#[derive(Debug, Default, Clone)]
pub struct ScriptedRandomness {
    axes: VecDeque<SplitAxis>,
    fan_outs: VecDeque<FanOut>,
    next_color: usize,
}

impl ScriptedRandomness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the decisions for one upcoming split.
    pub fn then(mut self, axis: SplitAxis, fan_out: FanOut) -> Self {
        self.push(axis, fan_out);
        self
    }

    pub fn push(&mut self, axis: SplitAxis, fan_out: FanOut) {
        self.axes.push_back(axis);
        self.fan_outs.push_back(fan_out);
    }

    /// Number of splits still scripted.
    pub fn remaining(&self) -> usize {
        self.axes.len().min(self.fan_outs.len())
    }
}

impl SplitRandomness for ScriptedRandomness {
    fn choose_axis(&mut self) -> SplitAxis {
        self.axes.pop_front().unwrap_or(SplitAxis::Vertical)
    }

    fn choose_fan_out(&mut self) -> FanOut {
        self.fan_outs.pop_front().unwrap_or(FanOut::Two)
    }

    fn choose_color(&mut self) -> Srgba {
        let color = SCRIPTED_PALETTE[self.next_color % SCRIPTED_PALETTE.len()];
        self.next_color += 1;
        color
    }
}

// ---------------------------------------------------------------------------
// TilingRng resource
// ---------------------------------------------------------------------------

/// Active randomness source for the tiling.
///
/// Insert before adding `TilingPlugin` to override the default seed; the
/// plugin only initializes it when absent.
#[derive(Resource)]
pub struct TilingRng(pub Box<dyn SplitRandomness + Send + Sync>);

impl Default for TilingRng {
    fn default() -> Self {
        Self::from_seed_u64(DEFAULT_SEED)
    }
}

impl TilingRng {
    pub fn new(source: impl SplitRandomness + Send + Sync + 'static) -> Self {
        Self(Box::new(source))
    }

    pub fn from_seed_u64(seed: u64) -> Self {
        Self::new(SeededRandomness::from_seed_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(SeededRandomness::from_entropy())
    }
}

impl SplitRandomness for TilingRng {
    fn choose_axis(&mut self) -> SplitAxis {
        self.0.choose_axis()
    }

    fn choose_fan_out(&mut self) -> FanOut {
        self.0.choose_fan_out()
    }

    fn choose_color(&mut self) -> Srgba {
        self.0.choose_color()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
