//! Expression selection state machine.
//!
//! The controller holds the current expression index and pushes the
//! matching [`UvTransform`] into a [`TextureStage`] every time the index
//! changes. Navigation wraps in both directions.

use crate::expressions::{Expression, ExpressionMap};
use crate::grid::ExpressionGrid;
use crate::UvTransform;

/// Destination for texture coordinate transforms.
///
/// Implemented by whatever owns the render-side texture binding. Each call
/// replaces the previous transform entirely.
pub trait TextureStage {
    fn set_uv_transform(&mut self, transform: UvTransform);
}

/// Cycles through the expressions of a sprite sheet.
#[derive(Debug, Clone)]
pub struct ExpressionController<S> {
    grid: ExpressionGrid,
    expressions: ExpressionMap,
    current: usize,
    stage: S,
}

impl<S: TextureStage> ExpressionController<S> {
    /// Create a controller showing expression 0.
    ///
    /// The transform for expression 0 is written to `stage` immediately.
    pub fn new(grid: ExpressionGrid, expressions: ExpressionMap, stage: S) -> Self {
        let mut controller = Self {
            grid,
            expressions,
            current: 0,
            stage,
        };
        controller.set_expression(0);
        controller
    }

    /// Show expression `index`.
    ///
    /// Indices outside the map are ignored and leave the state untouched.
    /// Returns whether the expression was applied.
    pub fn set_expression(&mut self, index: usize) -> bool {
        let Some(expression) = self.expressions.get(index) else {
            return false;
        };

        let transform = self.grid.cell_transform(expression.cell);
        tracing::info!(
            "Expression {} ({}): col={}, row={}, offset=({:.4}, {:.4})",
            index,
            expression.name,
            expression.cell.column,
            expression.cell.row,
            transform.offset.x,
            transform.offset.y
        );

        self.current = index;
        self.stage.set_uv_transform(transform);
        true
    }

    /// Move to the next expression, wrapping from the last to the first.
    pub fn advance(&mut self) {
        let next = (self.current + 1) % self.expressions.len();
        self.set_expression(next);
    }

    /// Move to the previous expression, wrapping from the first to the last.
    pub fn retreat(&mut self) {
        let len = self.expressions.len();
        let previous = (self.current + len - 1) % len;
        self.set_expression(previous);
    }
}

impl<S> ExpressionController<S> {
    /// Index of the expression being shown.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_expression(&self) -> &Expression {
        // `current` is only ever assigned indices validated against the map.
        &self.expressions.as_slice()[self.current]
    }

    #[must_use]
    pub fn expressions(&self) -> &ExpressionMap {
        &self.expressions
    }

    #[must_use]
    pub fn grid(&self) -> &ExpressionGrid {
        &self.grid
    }

    /// Number of expressions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    /// Always `false`: a controller cannot be built from an empty map.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    /// Transform expression `index` would apply, without selecting it.
    #[must_use]
    pub fn transform_for(&self, index: usize) -> Option<UvTransform> {
        self.expressions
            .get(index)
            .map(|expression| self.grid.cell_transform(expression.cell))
    }

    #[must_use]
    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }
}
