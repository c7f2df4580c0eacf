//! # TestTiling: headless harness for the tiling plugin
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + `TilingPlugin` so tests
//! can click rectangles through the same event path the UI uses and then
//! assert on the resulting store.

use bevy::app::App;
use bevy::prelude::*;
use bevy::window::RequestRedraw;

use crate::randomness::{ScriptedRandomness, TilingRng};
use crate::rectangle::{Geometry, RectId, Rectangle};
use crate::split::{FanOut, SplitAxis};
use crate::split_requests::{SplitRequested, SplitStats, TilingChanged};
use crate::store::TilingStore;
use crate::TilingPlugin;

pub struct TestTiling {
    app: App,
}

impl TestTiling {
    /// A fresh tiling whose randomness is an empty script, so every split is
    /// vertical two-way until `with_script` says otherwise.
    pub fn new() -> Self {
        Self::with_rng(TilingRng::new(ScriptedRandomness::new()))
    }

    /// A fresh tiling driven by a ChaCha seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(TilingRng::from_seed_u64(seed))
    }

    fn with_rng(rng: TilingRng) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        // Insert BEFORE TilingPlugin so init_resource keeps it.
        app.insert_resource(rng);
        app.add_plugins(TilingPlugin);
        app.update();
        Self { app }
    }

    /// Replace the randomness with a script of `(axis, fan_out)` decisions.
    pub fn with_script(mut self, steps: &[(SplitAxis, FanOut)]) -> Self {
        let mut script = ScriptedRandomness::new();
        for &(axis, fan_out) in steps {
            script.push(axis, fan_out);
        }
        self.app.insert_resource(TilingRng::new(script));
        self
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Queue a click on `id` and run one frame.
    pub fn click(&mut self, id: u32) -> &mut Self {
        self.app.world_mut().send_event(SplitRequested { id: RectId(id) });
        self.tick()
    }

    /// Queue several clicks and deliver them in a single frame.
    pub fn click_all_in_one_frame(&mut self, ids: &[u32]) -> &mut Self {
        for &id in ids {
            self.app.world_mut().send_event(SplitRequested { id: RectId(id) });
        }
        self.tick()
    }

    pub fn tick(&mut self) -> &mut Self {
        self.app.update();
        self
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn store(&self) -> &TilingStore {
        self.app.world().resource::<TilingStore>()
    }

    pub fn list(&self) -> Vec<Rectangle> {
        self.store().list()
    }

    pub fn geometries(&self) -> Vec<Geometry> {
        self.store().geometries()
    }

    pub fn ids(&self) -> Vec<u32> {
        self.store().iter().map(|r| r.id.0).collect()
    }

    pub fn stats(&self) -> SplitStats {
        *self.app.world().resource::<SplitStats>()
    }

    /// Drain the `TilingChanged` events still readable this frame.
    pub fn drain_changes(&mut self) -> Vec<TilingChanged> {
        self.app
            .world_mut()
            .resource_mut::<Events<TilingChanged>>()
            .drain()
            .collect()
    }

    /// Drain the redraw requests still readable this frame.
    pub fn drain_redraw_requests(&mut self) -> usize {
        self.app
            .world_mut()
            .resource_mut::<Events<RequestRedraw>>()
            .drain()
            .count()
    }
}

impl Default for TestTiling {
    fn default() -> Self {
        Self::new()
    }
}
