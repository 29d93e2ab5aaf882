//! 3D character viewer with sprite-sheet facial expressions.
//!
//! Loads a glTF character, textures it with one cell of an expression
//! sprite sheet and spins it on a turntable. Arrow keys cycle through the
//! expressions, 1-6 pick one directly.

mod caption;
mod expression;
mod scene;
mod settings;
mod turntable;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use caption::CaptionPlugin;
use expression::ExpressionPlugin;
use scene::CharacterScenePlugin;
use settings::ViewerSettings;
use turntable::TurntablePlugin;

fn main() {
    init_logging();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Expression Viewer".to_owned(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_plugins(EguiPlugin::default())
        .init_resource::<ViewerSettings>()
        .add_plugins((
            CharacterScenePlugin,
            ExpressionPlugin,
            TurntablePlugin,
            CaptionPlugin,
        ))
        .run();
}

#[cfg(not(target_family = "wasm"))]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,wgpu=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(target_family = "wasm")]
fn init_logging() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}
