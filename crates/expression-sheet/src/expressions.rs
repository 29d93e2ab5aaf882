//! Expression table: which grid cell each expression lives in.

use crate::error::{SheetError, SheetResult};

/// Grid cell position. Column 0 is the left edge, row 0 the top edge of
/// the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub column: u32,
    pub row: u32,
}

impl Cell {
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

/// A named expression and its cell on the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub name: String,
    pub cell: Cell,
}

impl Expression {
    #[must_use]
    pub fn new(name: impl Into<String>, cell: Cell) -> Self {
        Self {
            name: name.into(),
            cell,
        }
    }
}

/// Dense, zero-based mapping from expression index to [`Expression`].
///
/// The indices `0..len()` are exactly the valid expression indices. The
/// table cannot be changed after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionMap {
    expressions: Vec<Expression>,
}

impl ExpressionMap {
    /// Build a map from expressions listed in index order.
    pub fn new(expressions: Vec<Expression>) -> SheetResult<Self> {
        if expressions.is_empty() {
            return Err(SheetError::EmptyExpressionMap);
        }
        Ok(Self { expressions })
    }

    /// The six expressions of the 2 x 3 character sheet, left to right,
    /// top to bottom.
    #[must_use]
    pub fn character_sheet() -> Self {
        const CELLS: [(&str, Cell); 6] = [
            ("neutral", Cell::new(0, 0)),
            ("profile", Cell::new(1, 0)),
            ("shy", Cell::new(0, 1)),
            ("gazing", Cell::new(1, 1)),
            ("wink", Cell::new(0, 2)),
            ("surprised", Cell::new(1, 2)),
        ];

        Self {
            expressions: CELLS
                .iter()
                .map(|&(name, cell)| Expression::new(name, cell))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Expression> {
        self.expressions.get(index)
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        index < self.expressions.len()
    }

    /// Number of expressions. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    /// Always `false`; present for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &Expression> {
        self.expressions.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Expression] {
        &self.expressions
    }
}
