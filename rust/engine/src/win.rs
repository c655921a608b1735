use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::card::{CardGrid, FREE_CELL};
use crate::codec::BingoConfig;

/// Kind of winning line, in detection order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchKind {
    Row,
    Column,
    DiagonalMain,
    DiagonalAnti,
}

/// One winning line. `index` is the row or column number and is 0 for diagonals.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct BingoMatch {
    pub kind: MatchKind,
    pub index: usize,
}

impl BingoMatch {
    pub fn row(index: usize) -> Self {
        Self {
            kind: MatchKind::Row,
            index,
        }
    }

    pub fn column(index: usize) -> Self {
        Self {
            kind: MatchKind::Column,
            index,
        }
    }

    pub fn diagonal_main() -> Self {
        Self {
            kind: MatchKind::DiagonalMain,
            index: 0,
        }
    }

    pub fn diagonal_anti() -> Self {
        Self {
            kind: MatchKind::DiagonalAnti,
            index: 0,
        }
    }
}

/// Finds the first complete line on a row-major grid.
///
/// Lines are scanned rows top to bottom, then columns left to right, then
/// the main and anti diagonals. The first complete line wins, so exactly
/// one match is reported even when a call completes several lines at once.
/// A cell counts when it is the free sentinel or its value is in `called`.
///
/// Diagonals are only tested on square grids.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use bingo_engine::card::CardGrid;
/// use bingo_engine::win::{has_bingo, BingoMatch};
///
/// let grid = CardGrid::from_rows(vec![
///     vec![1, 10, 19],
///     vec![2, 0, 20],
///     vec![3, 12, 21],
/// ]);
/// let called: BTreeSet<u32> = [2, 20].into_iter().collect();
/// assert_eq!(has_bingo(&grid, &called), Some(BingoMatch::row(1)));
/// assert_eq!(has_bingo(&grid, &BTreeSet::new()), None);
/// ```
pub fn has_bingo(grid: &CardGrid, called: &BTreeSet<u32>) -> Option<BingoMatch> {
    let size = grid.size();
    if size == 0 {
        return None;
    }
    let marked = |row: usize, col: usize| {
        grid.get(row, col)
            .is_some_and(|v| v == FREE_CELL || called.contains(&v))
    };

    if let Some(row) = (0..size).find(|&r| (0..size).all(|c| marked(r, c))) {
        return Some(BingoMatch::row(row));
    }
    if let Some(col) = (0..size).find(|&c| (0..size).all(|r| marked(r, c))) {
        return Some(BingoMatch::column(col));
    }
    if !grid.is_square() {
        return None;
    }
    if (0..size).all(|i| marked(i, i)) {
        return Some(BingoMatch::diagonal_main());
    }
    if (0..size).all(|i| marked(i, size - 1 - i)) {
        return Some(BingoMatch::diagonal_anti());
    }
    None
}

/// Whether `(row, col)` lies on the line described by `m`.
pub fn is_cell_in_match(m: &BingoMatch, size: usize, row: usize, col: usize) -> bool {
    if row >= size || col >= size {
        return false;
    }
    match m.kind {
        MatchKind::Row => row == m.index,
        MatchKind::Column => col == m.index,
        MatchKind::DiagonalMain => row == col,
        MatchKind::DiagonalAnti => row + col == size - 1,
    }
}

/// A winning card within a configuration.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardWin {
    pub card_index: usize,
    pub line: BingoMatch,
}

/// Runs the detector over every card of a configuration (admin view).
pub fn find_winners(config: &BingoConfig, called: &BTreeSet<u32>) -> Vec<CardWin> {
    config
        .cards
        .iter()
        .enumerate()
        .filter_map(|(card_index, card)| {
            has_bingo(&card.to_grid(), called).map(|line| CardWin { card_index, line })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_free_cell_wins_immediately() {
        let grid = CardGrid::from_rows(vec![vec![0]]);
        assert_eq!(has_bingo(&grid, &BTreeSet::new()), Some(BingoMatch::row(0)));
    }

    #[test]
    fn single_numbered_cell_needs_call() {
        let grid = CardGrid::from_rows(vec![vec![7]]);
        assert_eq!(has_bingo(&grid, &BTreeSet::new()), None);
        let called: BTreeSet<u32> = [7].into_iter().collect();
        assert_eq!(has_bingo(&grid, &called), Some(BingoMatch::row(0)));
    }

    #[test]
    fn empty_grid_never_matches() {
        assert_eq!(has_bingo(&CardGrid::from_rows(vec![]), &BTreeSet::new()), None);
    }

    #[test]
    fn anti_diagonal_membership() {
        let m = BingoMatch::diagonal_anti();
        assert!(is_cell_in_match(&m, 5, 0, 4));
        assert!(is_cell_in_match(&m, 5, 4, 0));
        assert!(!is_cell_in_match(&m, 5, 0, 0));
        assert!(!is_cell_in_match(&m, 5, 5, 0));
    }

    #[test]
    fn match_serializes_with_kebab_kind() {
        let s = serde_json::to_string(&BingoMatch::diagonal_main()).unwrap();
        assert_eq!(s, r#"{"kind":"diagonal-main","index":0}"#);
    }
}
