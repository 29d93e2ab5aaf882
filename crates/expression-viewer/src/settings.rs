//! Viewer tunables.

use bevy::prelude::*;
use expression_sheet::{SheetLayout, UvOrigin};

/// Settings for the scene, sprite sheet and caption.
#[derive(Resource, Clone, Debug)]
pub struct ViewerSettings {
    /// glTF file holding the character, relative to the asset root.
    pub model_path: String,
    /// Sprite-sheet image, relative to the asset root.
    pub sheet_path: String,
    /// Pixel layout of the sprite sheet.
    pub layout: SheetLayout,
    /// Where the model stands.
    pub model_translation: Vec3,
    /// Uniform model scale.
    pub model_scale: f32,
    /// Camera position. The camera looks down -Z.
    pub camera_translation: Vec3,
    /// Caption shown next to the character.
    pub caption: String,
    /// Caption anchor in units of half the window height, origin at the
    /// window centre, Y up.
    pub caption_position: Vec2,
    /// Caption text height in the same units.
    pub caption_height: f32,
    /// Seconds per full turntable revolution.
    pub turntable_period_secs: f32,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            model_path: "models/character.glb".to_owned(),
            sheet_path: "textures/expressions.jpeg".to_owned(),
            // glTF texture coordinates start at the top-left of the image.
            layout: SheetLayout::default().with_origin(UvOrigin::TopLeft),
            model_translation: Vec3::new(0.0, 0.0, -10.0),
            model_scale: 4.0,
            camera_translation: Vec3::new(0.0, 3.0, 20.0),
            caption: "Hello".to_owned(),
            caption_position: Vec2::new(0.3, 0.0),
            caption_height: 0.07,
            turntable_period_secs: 20.0,
        }
    }
}
