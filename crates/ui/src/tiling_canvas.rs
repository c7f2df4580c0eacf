//! Full-window canvas that draws the tiling and turns clicks into split requests.
//!
//! Every rectangle is painted as an absolutely positioned box whose position
//! and size are its percentages of the canvas. A click is hit-tested against
//! the store, which resolves it to at most one rectangle, so exactly one
//! `SplitRequested` goes out per click and no other region ever sees it.

use bevy::color::ColorToPacked;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use tiling::config::ROOT_EXTENT;
use tiling::rectangle::{RectId, Rectangle};
use tiling::split_requests::SplitRequested;
use tiling::store::TilingStore;

// =============================================================================
// Constants
// =============================================================================

/// Width of the seam drawn inside each rectangle's edge.
const BORDER_WIDTH: f32 = 1.0;

const COLOR_BORDER: egui::Color32 = egui::Color32::WHITE;

// =============================================================================
// Systems
// =============================================================================

/// Paint the tiling and forward clicks.
pub fn tiling_canvas_ui(
    mut contexts: EguiContexts,
    store: Res<TilingStore>,
    mut requests: EventWriter<SplitRequested>,
) {
    let ctx = contexts.ctx_mut();
    let fill = ctx.style().visuals.panel_fill;

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(fill))
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click());
            let canvas = response.rect;

            for rect in store.iter() {
                let screen = rect_to_screen(rect, canvas);
                painter.rect_filled(screen, egui::CornerRadius::ZERO, to_color32(rect.color));
                painter.rect_stroke(
                    screen,
                    egui::CornerRadius::ZERO,
                    egui::Stroke::new(BORDER_WIDTH, COLOR_BORDER),
                    egui::StrokeKind::Inside,
                );
            }

            let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
            if !response.clicked() {
                return;
            }
            if let Some(id) = response
                .interact_pointer_pos()
                .and_then(|pos| click_target(&store, pos, canvas))
            {
                requests.send(SplitRequested { id });
            }
        });
}

/// The single rectangle a click at `pos` lands on, if any.
pub fn click_target(store: &TilingStore, pos: egui::Pos2, canvas: egui::Rect) -> Option<RectId> {
    let (px, py) = screen_to_percent(pos, canvas)?;
    store.rect_at(px, py)
}

// =============================================================================
// Coordinate mapping
// =============================================================================

/// Screen-space box for `rect` inside `canvas`.
pub fn rect_to_screen(rect: &Rectangle, canvas: egui::Rect) -> egui::Rect {
    let scale_x = canvas.width() as f64 / ROOT_EXTENT;
    let scale_y = canvas.height() as f64 / ROOT_EXTENT;
    let min = egui::pos2(
        canvas.min.x + (rect.x * scale_x) as f32,
        canvas.min.y + (rect.y * scale_y) as f32,
    );
    let max = egui::pos2(
        canvas.min.x + (rect.right() * scale_x) as f32,
        canvas.min.y + (rect.bottom() * scale_y) as f32,
    );
    egui::Rect::from_min_max(min, max)
}

/// Convert a screen position to root percentages, or `None` when it lies
/// outside the canvas or the canvas has no area.
pub fn screen_to_percent(pos: egui::Pos2, canvas: egui::Rect) -> Option<(f64, f64)> {
    if canvas.width() <= 0.0 || canvas.height() <= 0.0 || !canvas.contains(pos) {
        return None;
    }
    let px = (pos.x - canvas.min.x) as f64 / canvas.width() as f64 * ROOT_EXTENT;
    let py = (pos.y - canvas.min.y) as f64 / canvas.height() as f64 * ROOT_EXTENT;
    Some((px, py))
}

pub fn to_color32(color: Srgba) -> egui::Color32 {
    let [r, g, b, _] = color.to_u8_array();
    egui::Color32::from_rgb(r, g, b)
}
