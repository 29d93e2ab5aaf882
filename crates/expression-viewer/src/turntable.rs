//! Endless rotation about the vertical axis.

use std::f32::consts::TAU;

use bevy::prelude::*;

/// Plugin that spins every [`Turntable`] entity.
pub struct TurntablePlugin;

impl Plugin for TurntablePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, spin_turntables);
    }
}

/// Rotates the entity one full turn every `period_secs`, forever.
#[derive(Component, Debug, Clone, Copy)]
pub struct Turntable {
    pub period_secs: f32,
}

impl Turntable {
    #[must_use]
    pub fn new(period_secs: f32) -> Self {
        Self { period_secs }
    }

    /// Heading in radians after `elapsed_secs`, in `[0, TAU)`.
    ///
    /// Elapsed time is kept in `f64` so the heading stays smooth in long
    /// sessions.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn angle_at(&self, elapsed_secs: f64) -> f32 {
        if self.period_secs <= 0.0 {
            return 0.0;
        }
        (elapsed_secs / f64::from(self.period_secs)).fract() as f32 * TAU
    }
}

#[allow(clippy::needless_pass_by_value)]
fn spin_turntables(time: Res<Time>, mut query: Query<(&mut Transform, &Turntable)>) {
    let elapsed = time.elapsed_secs_f64();
    for (mut transform, turntable) in &mut query {
        transform.rotation = Quat::from_rotation_y(turntable.angle_at(elapsed));
    }
}
