//! Card storage and the row-major view used for win detection.
//!
//! A [`BingoCard`] is stored column-major, matching the persisted
//! configuration blob: `columns[c][r]` is the value at row `r` of column `c`.
//! Win detection reads cards row-major through [`CardGrid`]. The conversion
//! between the two is always an explicit [`BingoCard::to_grid`] /
//! [`CardGrid::to_card`] call.

use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationErrorKind};

/// Sentinel stored in the free cell.
pub const FREE_CELL: u32 = 0;

/// Row-major flattened index of `(row, col)` in a `size × size` grid.
pub fn flat_index(size: usize, row: usize, col: usize) -> usize {
    row * size + col
}

/// Inverse of [`flat_index`]: `(row, col)` of a flattened index.
pub fn cell_of(size: usize, index: usize) -> (usize, usize) {
    (index / size, index % size)
}

/// Immutable `size × size` card stored as a sequence of columns.
///
/// Not `Deserialize`: untrusted card JSON enters through [`crate::codec::ConfigCodec`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BingoCard {
    columns: Vec<Vec<u32>>,
}

impl BingoCard {
    /// Builds a card from column-major data, rejecting anything that is not square.
    pub fn from_columns(columns: Vec<Vec<u32>>) -> Result<Self, ValidationError> {
        let size = columns.len();
        if size == 0 {
            return Err(ValidationError::new("", ValidationErrorKind::NonPositive));
        }
        for (c, column) in columns.iter().enumerate() {
            if column.len() != size {
                return Err(ValidationError::new(
                    format!("[{}]", c),
                    ValidationErrorKind::SizeMismatch {
                        expected: size,
                        actual: column.len(),
                    },
                ));
            }
        }
        Ok(Self { columns })
    }

    pub fn size(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Vec<u32>] {
        &self.columns
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.columns.get(col).and_then(|c| c.get(row)).copied()
    }

    /// Flattened indices of every free cell on the card.
    pub fn free_cells(&self) -> Vec<usize> {
        let size = self.size();
        let mut out = Vec::new();
        for (c, column) in self.columns.iter().enumerate() {
            for (r, v) in column.iter().enumerate() {
                if *v == FREE_CELL {
                    out.push(flat_index(size, r, c));
                }
            }
        }
        out.sort_unstable();
        out
    }

    /// Transposes storage orientation into the row-major grid the detector reads.
    pub fn to_grid(&self) -> CardGrid {
        let size = self.size();
        let rows = (0..size)
            .map(|r| self.columns.iter().map(|col| col[r]).collect())
            .collect();
        CardGrid { rows }
    }
}

/// Row-major view of a card: `rows[r][c]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardGrid {
    rows: Vec<Vec<u32>>,
}

impl CardGrid {
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Self {
        Self { rows }
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// True when every row is as long as the grid is tall.
    pub fn is_square(&self) -> bool {
        let n = self.rows.len();
        self.rows.iter().all(|r| r.len() == n)
    }

    /// Transposes back to storage orientation.
    pub fn to_card(&self) -> Result<BingoCard, ValidationError> {
        if !self.is_square() {
            return Err(ValidationError::new(
                "",
                ValidationErrorKind::SizeMismatch {
                    expected: self.size(),
                    actual: self.rows.iter().map(Vec::len).max().unwrap_or(0),
                },
            ));
        }
        let size = self.size();
        let columns = (0..size)
            .map(|c| self.rows.iter().map(|row| row[c]).collect())
            .collect();
        BingoCard::from_columns(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BingoCard {
        BingoCard::from_columns(vec![vec![1, 2, 3], vec![10, 0, 12], vec![19, 20, 21]]).unwrap()
    }

    #[test]
    fn transpose_places_columns_as_rows() {
        let grid = sample().to_grid();
        assert_eq!(grid.rows()[0], vec![1, 10, 19]);
        assert_eq!(grid.rows()[1], vec![2, 0, 20]);
        assert_eq!(grid.get(2, 0), Some(3));
    }

    #[test]
    fn transpose_twice_is_identity() {
        let card = sample();
        assert_eq!(card.to_grid().to_card().unwrap(), card);
    }

    #[test]
    fn free_cells_reported_as_row_major_index() {
        assert_eq!(sample().free_cells(), vec![4]);
        assert_eq!(cell_of(5, 12), (2, 2));
        assert_eq!(flat_index(5, 2, 2), 12);
    }

    #[test]
    fn ragged_columns_rejected() {
        let err = BingoCard::from_columns(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(err.path, "[1]");
    }
}
