use std::fmt;

use crate::error::{ConfigurationError, MoveError};

use super::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(PlayerId),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(id) => Some(id),
        }
    }
}

/// A `height` x `width` grid of cells, stored row-major.
///
/// Row 0 is the top, row `height - 1` the bottom; pieces settle toward the
/// bottom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Largest number of cells a grid may hold.
    pub const MAX_CELLS: usize = 1 << 20;

    /// Create an empty grid. Both dimensions must be positive and the cell
    /// count at most [`Grid::MAX_CELLS`].
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigurationError> {
        if width == 0 || height == 0 {
            return Err(ConfigurationError::InvalidDimensions { width, height });
        }
        let size = width
            .checked_mul(height)
            .filter(|&size| size <= Self::MAX_CELLS)
            .ok_or(ConfigurationError::TooLarge {
                width,
                height,
                max_cells: Self::MAX_CELLS,
            })?;
        Ok(Grid {
            width,
            height,
            cells: vec![Cell::Empty; size],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position.
    ///
    /// Panics if the position is outside the grid; use [`Grid::cell`] for a
    /// checked lookup.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.height && col < self.width, "({row}, {col}) is off the grid");
        self.cells[row * self.width + col]
    }

    /// Checked lookup taking signed coordinates, `None` when off the grid.
    pub fn cell(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        !self.get(0, col).is_empty()
    }

    /// Check if every cell of the grid is occupied
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// Columns that still accept a piece, left to right.
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Row a piece dropped into `col` would land on, scanning from the bottom.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height).rev().find(|&row| self.get(row, col).is_empty())
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: PlayerId) -> Result<usize, MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn {
                column: i64::try_from(col).unwrap_or(i64::MAX),
                width: self.width,
            });
        }

        let row = self
            .lowest_empty_row(col)
            .ok_or(MoveError::ColumnFull(col))?;
        self.cells[row * self.width + col] = Cell::Occupied(player);
        Ok(row)
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Rows of the grid, top first.
    fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell_width = self
            .cells
            .iter()
            .filter_map(|c| c.owner())
            .map(|id| id.to_string().len())
            .chain(std::iter::once((self.width - 1).to_string().len()))
            .max()
            .unwrap_or(1);

        for col in 0..self.width {
            write!(f, " {col:>cell_width$}")?;
        }
        writeln!(f)?;

        for row in self.rows() {
            for cell in row {
                match cell {
                    Cell::Empty => write!(f, " {:>cell_width$}", ".")?,
                    Cell::Occupied(id) => write!(f, " {:>cell_width$}", id.to_string())?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
