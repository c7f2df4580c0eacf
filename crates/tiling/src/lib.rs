use bevy::prelude::*;
use bevy::window::RequestRedraw;

pub mod config;
pub mod randomness;
pub mod rectangle;
pub mod split;
pub mod split_requests;
pub mod store;
pub mod tiling_error;

#[cfg(test)]
pub mod test_harness;

use randomness::TilingRng;
use split_requests::{
    apply_split_requests, ApplySplitsSet, SplitRequested, SplitStats, TilingChanged,
};
use store::TilingStore;

/// Owns the tiling state and applies split requests.
///
/// Insert a `TilingRng` before adding the plugin to choose the seed; otherwise
/// `DEFAULT_SEED` is used.
pub struct TilingPlugin;

impl Plugin for TilingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TilingRng>()
            .init_resource::<TilingStore>()
            .init_resource::<SplitStats>()
            .add_event::<SplitRequested>()
            .add_event::<TilingChanged>()
            // Normally registered by WindowPlugin; headless apps need it too.
            .add_event::<RequestRedraw>()
            .add_systems(Update, apply_split_requests.in_set(ApplySplitsSet));

        #[cfg(debug_assertions)]
        app.add_systems(
            Update,
            split_requests::verify_tiling_on_change
                .after(ApplySplitsSet)
                .run_if(resource_changed::<TilingStore>),
        );
    }
}
