use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use tiling::split_requests::ApplySplitsSet;

pub mod theme;
pub mod tiling_canvas;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, (spawn_ui_camera, theme::apply_canvas_theme))
            .add_systems(
                Update,
                tiling_canvas::tiling_canvas_ui.before(ApplySplitsSet),
            );
    }
}

/// egui draws on top of the primary window's camera output.
fn spawn_ui_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
