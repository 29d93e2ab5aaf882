//! On-screen caption beside the character.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};

use crate::settings::ViewerSettings;

/// Plugin drawing the caption overlay.
pub struct CaptionPlugin;

impl Plugin for CaptionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, draw_caption);
    }
}

/// Caption position and size in logical window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptionPlacement {
    /// Top-left corner of the text (left aligned).
    pub top_left: Vec2,
    /// Font size in pixels.
    pub font_size: f32,
}

impl CaptionPlacement {
    /// Convert a baseline anchor measured in half-heights from the window
    /// centre (Y up) into window pixels (Y down).
    #[must_use]
    pub fn new(window_size: Vec2, anchor: Vec2, height: f32) -> Self {
        let unit = window_size.y / 2.0;
        let centre = window_size / 2.0;
        let font_size = height * unit;
        let baseline = Vec2::new(centre.x + anchor.x * unit, centre.y - anchor.y * unit);

        Self {
            top_left: Vec2::new(baseline.x, baseline.y - font_size),
            font_size,
        }
    }
}

#[allow(clippy::needless_pass_by_value)]
fn draw_caption(
    mut contexts: EguiContexts,
    settings: Res<ViewerSettings>,
    window: Single<&Window, With<PrimaryWindow>>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    let placement = CaptionPlacement::new(
        Vec2::new(window.width(), window.height()),
        settings.caption_position,
        settings.caption_height,
    );

    egui::Area::new(egui::Id::new("caption"))
        .fixed_pos(egui::pos2(placement.top_left.x, placement.top_left.y))
        .interactable(false)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(&settings.caption)
                    .size(placement.font_size)
                    .color(egui::Color32::WHITE),
            );
        });

    Ok(())
}
