//! Sprite grid geometry and the cell-to-UV mapping.

use glam::Vec2;

use crate::error::{SheetError, SheetResult};
use crate::expressions::Cell;
use crate::UvTransform;

/// Where `(0, 0)` sits in texture space for the renderer consuming the
/// transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UvOrigin {
    /// V grows upwards from the bottom edge of the image.
    #[default]
    BottomLeft,
    /// V grows downwards from the top edge of the image (glTF, wgpu).
    TopLeft,
}

/// Pixel dimensions of a sprite sheet and of one of its cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetLayout {
    pub sheet_width: f32,
    pub sheet_height: f32,
    pub cell_width: f32,
    pub cell_height: f32,
    pub origin: UvOrigin,
}

impl Default for SheetLayout {
    /// The 2 x 3 character sheet: 2480x3508 pixels, 1250x1050 per cell.
    fn default() -> Self {
        Self {
            sheet_width: 2480.0,
            sheet_height: 3508.0,
            cell_width: 1250.0,
            cell_height: 1050.0,
            origin: UvOrigin::BottomLeft,
        }
    }
}

impl SheetLayout {
    /// Same layout, targeting a renderer with the given UV origin.
    #[must_use]
    pub fn with_origin(mut self, origin: UvOrigin) -> Self {
        self.origin = origin;
        self
    }
}

/// Validated sprite grid with precomputed UV scale.
///
/// Cells are assumed to tile the sheet; this is not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpressionGrid {
    layout: SheetLayout,
    uv_scale: Vec2,
}

impl ExpressionGrid {
    /// Build a grid, rejecting zero, negative or non-finite dimensions.
    pub fn new(layout: SheetLayout) -> SheetResult<Self> {
        check_dimension("sheet width", layout.sheet_width)?;
        check_dimension("sheet height", layout.sheet_height)?;
        check_dimension("cell width", layout.cell_width)?;
        check_dimension("cell height", layout.cell_height)?;

        let uv_scale = Vec2::new(
            layout.cell_width / layout.sheet_width,
            layout.cell_height / layout.sheet_height,
        );

        Ok(Self { layout, uv_scale })
    }

    #[must_use]
    pub fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    #[must_use]
    pub fn origin(&self) -> UvOrigin {
        self.layout.origin
    }

    /// Fraction of the sheet covered by one cell, per axis.
    #[must_use]
    pub fn uv_scale(&self) -> Vec2 {
        self.uv_scale
    }

    /// UV offset of a cell's corner nearest the texture origin.
    ///
    /// Row 0 is the top row of the image. With a bottom-left origin the
    /// cell's lower edge is at `1 - (row + 1) * scale_v`, so the top row
    /// gets the largest V offset.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn cell_offset(&self, cell: Cell) -> Vec2 {
        let offset_u = cell.column as f32 * self.uv_scale.x;
        let offset_v = match self.layout.origin {
            UvOrigin::BottomLeft => 1.0 - (cell.row as f32 + 1.0) * self.uv_scale.y,
            UvOrigin::TopLeft => cell.row as f32 * self.uv_scale.y,
        };
        Vec2::new(offset_u, offset_v)
    }

    /// Full transform that shows exactly `cell`.
    #[must_use]
    pub fn cell_transform(&self, cell: Cell) -> UvTransform {
        UvTransform {
            offset: self.cell_offset(cell),
            scale: self.uv_scale,
        }
    }
}

fn check_dimension(name: &'static str, value: f32) -> SheetResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SheetError::InvalidDimension { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn grid(origin: UvOrigin) -> ExpressionGrid {
        ExpressionGrid::new(SheetLayout::default().with_origin(origin)).unwrap()
    }

    #[test]
    fn scale_is_cell_over_sheet() {
        let scale = grid(UvOrigin::BottomLeft).uv_scale();
        assert!((scale.x - 1250.0 / 2480.0).abs() < EPSILON);
        assert!((scale.y - 1050.0 / 3508.0).abs() < EPSILON);
        assert!((scale.x - 0.5040).abs() < EPSILON);
        assert!((scale.y - 0.2993).abs() < EPSILON);
    }

    #[test]
    fn top_left_cell_sits_at_the_top_of_a_bottom_left_sheet() {
        let offset = grid(UvOrigin::BottomLeft).cell_offset(Cell::new(0, 0));
        assert!(offset.x.abs() < EPSILON);
        assert!((offset.y - (1.0 - 1050.0 / 3508.0)).abs() < EPSILON);
        assert!((offset.y - 0.7007).abs() < EPSILON);
    }

    #[test]
    fn bottom_right_cell() {
        let offset = grid(UvOrigin::BottomLeft).cell_offset(Cell::new(1, 2));
        assert!((offset.x - 1250.0 / 2480.0).abs() < EPSILON);
        assert!((offset.y - (1.0 - 3.0 * 1050.0 / 3508.0)).abs() < EPSILON);
        assert!((offset.y - 0.1020).abs() < EPSILON);
    }

    #[test]
    fn top_left_origin_mirrors_the_v_axis() {
        let bottom_left = grid(UvOrigin::BottomLeft);
        let top_left = grid(UvOrigin::TopLeft);
        let scale_v = bottom_left.uv_scale().y;

        for row in 0..3 {
            for column in 0..2 {
                let cell = Cell::new(column, row);
                let bl = bottom_left.cell_offset(cell);
                let tl = top_left.cell_offset(cell);
                assert!((bl.x - tl.x).abs() < EPSILON);
                assert!((bl.y + tl.y + scale_v - 1.0).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn transform_carries_the_grid_scale() {
        let grid = grid(UvOrigin::BottomLeft);
        let transform = grid.cell_transform(Cell::new(1, 1));
        assert_eq!(transform.scale, grid.uv_scale());
        assert_eq!(transform.offset, grid.cell_offset(Cell::new(1, 1)));
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        let layout = SheetLayout {
            cell_height: 0.0,
            ..SheetLayout::default()
        };
        assert_eq!(
            ExpressionGrid::new(layout),
            Err(SheetError::InvalidDimension {
                name: "cell height",
                value: 0.0
            })
        );

        let layout = SheetLayout {
            sheet_width: -2480.0,
            ..SheetLayout::default()
        };
        assert!(matches!(
            ExpressionGrid::new(layout),
            Err(SheetError::InvalidDimension { name: "sheet width", .. })
        ));

        let layout = SheetLayout {
            sheet_height: f32::NAN,
            ..SheetLayout::default()
        };
        assert!(ExpressionGrid::new(layout).is_err());
    }
}
