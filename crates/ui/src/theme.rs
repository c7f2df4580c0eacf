use bevy_egui::{egui, EguiContexts};

/// Panel fill behind the tiles. Matches the tile border so seams read as
/// continuous white lines.
const CANVAS_BACKGROUND: egui::Color32 = egui::Color32::WHITE;

pub fn apply_canvas_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    style.visuals.panel_fill = CANVAS_BACKGROUND;
    style.visuals.window_fill = CANVAS_BACKGROUND;

    // Tiles sit flush against the window edges.
    style.spacing.window_margin = egui::Margin::ZERO;
    style.spacing.item_spacing = egui::Vec2::ZERO;

    ctx.set_style(style);
}
