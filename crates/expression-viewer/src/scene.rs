//! Camera and character model.

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;

use crate::settings::ViewerSettings;
use crate::turntable::Turntable;

/// Plugin that spawns the camera and the character.
pub struct CharacterScenePlugin;

impl Plugin for CharacterScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_scene);
    }
}

/// Marker for the root entity of the character model. Every mesh below it
/// receives the sprite-sheet material.
#[derive(Component)]
pub struct CharacterModel;

#[allow(clippy::needless_pass_by_value)]
fn spawn_scene(
    mut commands: Commands,
    settings: Res<ViewerSettings>,
    asset_server: Res<AssetServer>,
) {
    // Fixed camera; there are no mouse controls.
    commands.spawn((
        Camera3d::default(),
        Tonemapping::None,
        Transform::from_translation(settings.camera_translation),
    ));

    let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(settings.model_path.clone()));
    commands.spawn((
        SceneRoot(scene),
        Transform::from_translation(settings.model_translation)
            .with_scale(Vec3::splat(settings.model_scale)),
        CharacterModel,
        Turntable::new(settings.turntable_period_secs),
    ));

    tracing::info!("Loading character model from {}", settings.model_path);
}
