//! Select facial expressions out of a single sprite-sheet texture.
//!
//! A sprite sheet packs several expressions into one image laid out as a
//! grid of equally sized cells. Showing an expression means pointing the
//! model's texture coordinates at one cell: scale the UVs down to the size
//! of a cell and offset them to the cell's corner.
//!
//! This crate is engine-agnostic. The [`ExpressionController`] computes the
//! transform and hands it to a [`TextureStage`], which the host renderer
//! implements.
//!
//! # Key types
//!
//! - [`ExpressionGrid`]: sheet and cell dimensions, derived UV scale
//! - [`ExpressionMap`]: expression index to grid cell
//! - [`ExpressionController`]: current expression, cyclic navigation
//! - [`UvTransform`]: scale and offset applied to texture coordinates

mod error;

pub mod controller;
pub mod expressions;
pub mod grid;

pub use controller::{ExpressionController, TextureStage};
pub use error::{SheetError, SheetResult};
pub use expressions::{Cell, Expression, ExpressionMap};
pub use grid::{ExpressionGrid, SheetLayout, UvOrigin};

use glam::{Affine2, Vec2};

/// UV offset and scale for texture coordinate mapping.
///
/// Texture coordinates are mapped as `uv * scale + offset`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UvTransform {
    pub offset: Vec2,
    pub scale: Vec2,
}

impl UvTransform {
    /// The identity mapping (whole texture visible).
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        scale: Vec2::ONE,
    };

    /// Express the transform as an affine matrix, scale applied first.
    #[must_use]
    pub fn to_affine(&self) -> Affine2 {
        Affine2::from_scale_angle_translation(self.scale, 0.0, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affine_scales_before_offsetting() {
        let transform = UvTransform {
            offset: Vec2::new(0.5, 0.25),
            scale: Vec2::new(0.5, 0.25),
        };
        let affine = transform.to_affine();

        assert!(affine.transform_point2(Vec2::ZERO).abs_diff_eq(Vec2::new(0.5, 0.25), 1e-6));
        assert!(affine.transform_point2(Vec2::ONE).abs_diff_eq(Vec2::new(1.0, 0.5), 1e-6));
    }

    #[test]
    fn identity_is_the_identity_affine() {
        assert_eq!(UvTransform::IDENTITY.to_affine(), Affine2::IDENTITY);
    }
}
