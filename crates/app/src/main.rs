use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use tiling::randomness::TilingRng;

/// Optional `u64` seed; a fixed seed replays the same splits for the same clicks.
const SEED_ENV_VAR: &str = "RECT_SPLITTER_SEED";

const WINDOW_TITLE: &str = "Rectangle Splitter";
const WINDOW_RESOLUTION: (f32, f32) = (1024.0, 768.0);

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: WINDOW_TITLE.to_string(),
            resolution: WINDOW_RESOLUTION.into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    // Nothing animates: only redraw in response to input.
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(250)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_secs(1)),
    });

    // Must be in place before TilingPlugin builds the root rectangle.
    let seed = std::env::var(SEED_ENV_VAR).ok();
    app.insert_resource(tiling_rng_from_env(seed.as_deref()));

    app.add_plugins((tiling::TilingPlugin, ui::UiPlugin));

    app.run();
}

fn tiling_rng_from_env(value: Option<&str>) -> TilingRng {
    match value.map(parse_seed) {
        Some(Ok(seed)) => {
            info!("Seeding tiling randomness from {SEED_ENV_VAR}={seed}");
            TilingRng::from_seed_u64(seed)
        }
        Some(Err(raw)) => {
            warn!("Ignoring {SEED_ENV_VAR}={raw:?}: not a u64, using OS entropy");
            TilingRng::from_entropy()
        }
        None => {
            info!("Seeding tiling randomness from OS entropy");
            TilingRng::from_entropy()
        }
    }
}

fn parse_seed(raw: &str) -> Result<u64, &str> {
    raw.trim().parse::<u64>().map_err(|_| raw)
}
