//! Plain-text rendering of cards and match results for terminal display.
//!
//! Cells are five characters wide. A called value is wrapped in parentheses,
//! the free cell prints as `FREE`, and cells on the winning line are wrapped
//! in angle brackets instead.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use bingo_engine::card::CardGrid;
//! use bingo_cli::formatters::format_grid;
//!
//! let grid = CardGrid::from_rows(vec![vec![1, 10, 19], vec![2, 0, 20], vec![3, 12, 21]]);
//! let called: BTreeSet<u32> = [10].into_iter().collect();
//! let text = format_grid(&grid, &called, None);
//! assert!(text.contains("(10)"));
//! assert!(text.contains("FREE"));
//! ```

use std::collections::BTreeSet;

use bingo_engine::card::{CardGrid, FREE_CELL};
use bingo_engine::win::{is_cell_in_match, BingoMatch, MatchKind};

const LETTERS: [char; 5] = ['B', 'I', 'N', 'G', 'O'];

/// Column headings: B-I-N-G-O for five-column cards, numbers otherwise.
pub fn format_header(size: usize) -> String {
    (0..size)
        .map(|c| {
            if size == LETTERS.len() {
                format!("{:>5}", LETTERS[c])
            } else {
                format!("{:>5}", c + 1)
            }
        })
        .collect()
}

pub fn format_cell(value: u32, called: bool, on_line: bool) -> String {
    let body = if value == FREE_CELL {
        "FREE".to_string()
    } else if on_line {
        format!("<{}>", value)
    } else if called {
        format!("({})", value)
    } else {
        value.to_string()
    };
    format!("{:>5}", body)
}

/// Renders the grid row by row under a header line.
pub fn format_grid(grid: &CardGrid, called: &BTreeSet<u32>, line: Option<&BingoMatch>) -> String {
    let size = grid.size();
    let mut out = format_header(size);
    for (r, row) in grid.rows().iter().enumerate() {
        out.push('\n');
        for (c, value) in row.iter().enumerate() {
            let on_line = line.is_some_and(|m| is_cell_in_match(m, size, r, c));
            out.push_str(&format_cell(*value, called.contains(value), on_line));
        }
    }
    out
}

/// Human-readable name of a winning line, e.g. `row 3` or `main diagonal`.
pub fn format_match(m: &BingoMatch) -> String {
    match m.kind {
        MatchKind::Row => format!("row {}", m.index + 1),
        MatchKind::Column => format!("column {}", m.index + 1),
        MatchKind::DiagonalMain => "main diagonal".to_string(),
        MatchKind::DiagonalAnti => "anti diagonal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_uses_letters_for_five_columns() {
        assert_eq!(format_header(5), "    B    I    N    G    O");
        assert_eq!(format_header(3), "    1    2    3");
    }

    #[test]
    fn cells_are_fixed_width() {
        assert_eq!(format_cell(7, false, false), "    7");
        assert_eq!(format_cell(7, true, false), "  (7)");
        assert_eq!(format_cell(75, true, true), " <75>");
        assert_eq!(format_cell(0, false, true), " FREE");
    }

    #[test]
    fn winning_line_is_highlighted() {
        let grid = CardGrid::from_rows(vec![vec![1, 10], vec![2, 11]]);
        let called: BTreeSet<u32> = [1, 10].into_iter().collect();
        let text = format_grid(&grid, &called, Some(&BingoMatch::row(0)));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "  <1> <10>");
        assert_eq!(lines[2], "    2   11");
    }

    #[test]
    fn match_names_are_one_based() {
        assert_eq!(format_match(&BingoMatch::row(0)), "row 1");
        assert_eq!(format_match(&BingoMatch::column(4)), "column 5");
        assert_eq!(format_match(&BingoMatch::diagonal_anti()), "anti diagonal");
    }
}
