//! Sprite-sheet facial expressions on the character model.
//!
//! One unlit, alpha-blended material carries the sprite sheet and is shared
//! by every mesh of the character. Selecting an expression rewrites that
//! material's UV transform so only the expression's cell is visible.
//!
//! Keys: left/right arrows cycle, 1-6 select directly.

use bevy::prelude::*;
use expression_sheet::{
    ExpressionController, ExpressionGrid, ExpressionMap, TextureStage, UvTransform,
};
use glam::Affine2;

use crate::scene::CharacterModel;
use crate::settings::ViewerSettings;

/// Keys that jump straight to an expression index.
pub const EXPRESSION_KEYS: [(KeyCode, usize); 12] = [
    (KeyCode::Digit1, 0),
    (KeyCode::Digit2, 1),
    (KeyCode::Digit3, 2),
    (KeyCode::Digit4, 3),
    (KeyCode::Digit5, 4),
    (KeyCode::Digit6, 5),
    (KeyCode::Numpad1, 0),
    (KeyCode::Numpad2, 1),
    (KeyCode::Numpad3, 2),
    (KeyCode::Numpad4, 3),
    (KeyCode::Numpad5, 4),
    (KeyCode::Numpad6, 5),
];

/// Key that shows the next expression.
pub const NEXT_KEY: KeyCode = KeyCode::ArrowRight;
/// Key that shows the previous expression.
pub const PREVIOUS_KEY: KeyCode = KeyCode::ArrowLeft;

/// Plugin for expression selection.
pub struct ExpressionPlugin;

impl Plugin for ExpressionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_face_expressions).add_systems(
            Update,
            (
                handle_expression_keys,
                bind_sheet_to_model,
                sync_face_material,
            )
                .chain()
                .run_if(resource_exists::<FaceExpressions>),
        );
    }
}

/// Texture stage backed by the shared face material.
///
/// The controller writes here; [`sync_face_material`] copies the transform
/// into the material asset.
#[derive(Debug, Clone)]
pub struct FaceStage {
    /// Material carrying the sprite sheet.
    pub material: Handle<StandardMaterial>,
    /// Latest transform written by the controller.
    pub uv_transform: Affine2,
}

impl FaceStage {
    #[must_use]
    pub fn new(material: Handle<StandardMaterial>) -> Self {
        Self {
            material,
            uv_transform: Affine2::IDENTITY,
        }
    }
}

impl TextureStage for FaceStage {
    fn set_uv_transform(&mut self, transform: UvTransform) {
        self.uv_transform = transform.to_affine();
    }
}

/// The expression controller driving the face material.
#[derive(Resource, Deref, DerefMut)]
pub struct FaceExpressions(pub ExpressionController<FaceStage>);

impl FaceExpressions {
    #[must_use]
    pub fn new(grid: ExpressionGrid, expressions: ExpressionMap, stage: FaceStage) -> Self {
        Self(ExpressionController::new(grid, expressions, stage))
    }
}

/// Create the sprite-sheet material and the controller.
#[allow(clippy::needless_pass_by_value)]
fn setup_face_expressions(
    mut commands: Commands,
    settings: Res<ViewerSettings>,
    asset_server: Res<AssetServer>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut exit: MessageWriter<AppExit>,
) {
    let grid = match ExpressionGrid::new(settings.layout) {
        Ok(grid) => grid,
        Err(e) => {
            tracing::error!("Invalid sprite sheet layout: {}", e);
            exit.write(AppExit::error());
            return;
        }
    };

    let sheet: Handle<Image> = asset_server.load(settings.sheet_path.clone());
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(sheet),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..Default::default()
    });

    let expressions = FaceExpressions::new(
        grid,
        ExpressionMap::character_sheet(),
        FaceStage::new(material),
    );
    tracing::info!(
        "Loaded {} expressions from {}",
        expressions.len(),
        settings.sheet_path
    );
    commands.insert_resource(expressions);
}

/// Cycle with the arrow keys, jump with the digit keys.
#[allow(clippy::needless_pass_by_value)]
fn handle_expression_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut expressions: ResMut<FaceExpressions>,
) {
    if keyboard.just_pressed(NEXT_KEY) {
        expressions.advance();
    }
    if keyboard.just_pressed(PREVIOUS_KEY) {
        expressions.retreat();
    }

    for &(key, index) in &EXPRESSION_KEYS {
        if keyboard.just_pressed(key) {
            expressions.set_expression(index);
        }
    }
}

/// Swap the face material onto meshes of the character as the scene spawns
/// them. The whole model is textured, not a separate face region.
#[allow(clippy::needless_pass_by_value)]
fn bind_sheet_to_model(
    expressions: Res<FaceExpressions>,
    mut meshes: Query<
        (Entity, &mut MeshMaterial3d<StandardMaterial>),
        Added<MeshMaterial3d<StandardMaterial>>,
    >,
    parents: Query<&ChildOf>,
    models: Query<(), With<CharacterModel>>,
) {
    let face = &expressions.stage().material;
    let mut bound = 0;

    for (entity, mut material) in &mut meshes {
        if material.0 == *face {
            continue;
        }
        if !parents
            .iter_ancestors(entity)
            .any(|ancestor| models.contains(ancestor))
        {
            continue;
        }
        material.0 = face.clone();
        bound += 1;
    }

    if bound > 0 {
        tracing::info!("Bound sprite sheet to {} model meshes", bound);
    }
}

/// Push the controller's transform into the face material.
#[allow(clippy::needless_pass_by_value)]
fn sync_face_material(
    expressions: Res<FaceExpressions>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !expressions.is_changed() {
        return;
    }

    let stage = expressions.stage();
    if let Some(mut material) = materials.get_mut(&stage.material) {
        material.uv_transform = stage.uv_transform;
    }
}
