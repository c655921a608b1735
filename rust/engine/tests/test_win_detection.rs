use std::collections::BTreeSet;

use bingo_engine::card::{BingoCard, CardGrid, FREE_CELL};
use bingo_engine::codec::BingoConfig;
use bingo_engine::generator::CardGenerator;
use bingo_engine::win::{find_winners, has_bingo, is_cell_in_match, BingoMatch, MatchKind};
use proptest::prelude::*;

fn card() -> CardGrid {
    CardGrid::from_rows(vec![
        vec![1, 16, 31, 46, 61],
        vec![2, 17, 32, 47, 62],
        vec![3, 18, 0, 48, 63],
        vec![4, 19, 34, 49, 64],
        vec![5, 20, 35, 50, 65],
    ])
}

fn called(values: &[u32]) -> BTreeSet<u32> {
    values.iter().copied().collect()
}

#[test]
fn top_row_completes() {
    let m = has_bingo(&card(), &called(&[1, 16, 31, 46, 61]));
    assert_eq!(m, Some(BingoMatch::row(0)));
}

#[test]
fn main_diagonal_counts_free_cell() {
    let m = has_bingo(&card(), &called(&[1, 17, 49, 65]));
    assert_eq!(m, Some(BingoMatch::diagonal_main()));
}

#[test]
fn anti_diagonal_counts_free_cell() {
    let m = has_bingo(&card(), &called(&[61, 47, 19, 5]));
    assert_eq!(m, Some(BingoMatch::diagonal_anti()));
}

#[test]
fn column_through_free_cell() {
    let m = has_bingo(&card(), &called(&[31, 32, 34, 35]));
    assert_eq!(m, Some(BingoMatch::column(2)));
}

#[test]
fn one_missing_value_never_matches() {
    let grid = card();
    let lines: Vec<Vec<u32>> = vec![
        vec![1, 16, 31, 46, 61],
        vec![16, 17, 18, 19, 20],
        vec![1, 17, 49, 65],
        vec![61, 47, 19, 5],
    ];
    for line in lines {
        for skip in 0..line.len() {
            let partial: Vec<u32> = line
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, v)| *v)
                .collect();
            assert_eq!(
                has_bingo(&grid, &called(&partial)),
                None,
                "line {:?} without {} must not match",
                line,
                line[skip]
            );
        }
    }
}

#[test]
fn empty_call_set_never_matches() {
    assert_eq!(has_bingo(&card(), &BTreeSet::new()), None);
}

#[test]
fn row_beats_column_when_both_complete() {
    // row 4 and column 0 share the value 5
    let both = called(&[1, 2, 3, 4, 5, 20, 35, 50, 65]);
    assert_eq!(has_bingo(&card(), &both), Some(BingoMatch::row(4)));
}

#[test]
fn column_beats_diagonal_when_both_complete() {
    let both = called(&[16, 17, 18, 19, 20, 1, 49, 65]);
    assert_eq!(has_bingo(&card(), &both), Some(BingoMatch::column(1)));
}

#[test]
fn card_without_free_cell_needs_every_value() {
    let grid = CardGrid::from_rows(vec![vec![1, 10, 19], vec![2, 11, 20], vec![3, 12, 21]]);
    assert_eq!(has_bingo(&grid, &called(&[1, 11])), None);
    assert_eq!(
        has_bingo(&grid, &called(&[1, 11, 21])),
        Some(BingoMatch::diagonal_main())
    );
}

#[test]
fn stored_card_is_transposed_before_detection() {
    // column-major storage of the same card: first stored column is B
    let stored = BingoCard::from_columns(vec![
        vec![1, 2, 3, 4, 5],
        vec![16, 17, 18, 19, 20],
        vec![31, 32, 0, 34, 35],
        vec![46, 47, 48, 49, 50],
        vec![61, 62, 63, 64, 65],
    ])
    .unwrap();
    let grid = stored.to_grid();
    assert_eq!(grid, card());
    assert_eq!(
        has_bingo(&grid, &called(&[1, 16, 31, 46, 61])),
        Some(BingoMatch::row(0))
    );
}

#[test]
fn highlighted_cells_match_each_line_kind() {
    let row = BingoMatch::row(3);
    let col = BingoMatch::column(1);
    let main = BingoMatch::diagonal_main();
    let anti = BingoMatch::diagonal_anti();
    let count = |m: &BingoMatch| {
        (0..5)
            .flat_map(|r| (0..5).map(move |c| (r, c)))
            .filter(|(r, c)| is_cell_in_match(m, 5, *r, *c))
            .count()
    };
    for m in [row, col, main, anti] {
        assert_eq!(count(&m), 5, "{:?} should cover one full line", m.kind);
    }
    assert!(is_cell_in_match(&row, 5, 3, 0));
    assert!(!is_cell_in_match(&row, 5, 2, 0));
    assert!(is_cell_in_match(&col, 5, 4, 1));
    assert!(is_cell_in_match(&main, 5, 2, 2));
    assert!(is_cell_in_match(&anti, 5, 1, 3));
    assert_eq!(main.kind, MatchKind::DiagonalMain);
}

#[test]
fn winners_listed_per_card() {
    let cards = CardGenerator::new_with_seed(11)
        .generate("75-ball", 3, None)
        .unwrap();
    let target_row: Vec<u32> = cards[1].to_grid().rows()[0].clone();
    let config = BingoConfig {
        size: 5,
        number_of_cards: 3,
        cards,
    };
    let called: BTreeSet<u32> = target_row.into_iter().collect();
    let winners = find_winners(&config, &called);
    assert!(winners
        .iter()
        .any(|w| w.card_index == 1 && w.line == BingoMatch::row(0)));
}

proptest! {
    #[test]
    fn reported_line_is_fully_marked(seed in any::<u64>(), picks in prop::collection::vec(1u32..=75, 0..60)) {
        let cards = CardGenerator::new_with_seed(seed).generate("75-ball", 1, None).unwrap();
        let grid = cards[0].to_grid();
        let called: BTreeSet<u32> = picks.into_iter().collect();
        if let Some(m) = has_bingo(&grid, &called) {
            for r in 0..5 {
                for c in 0..5 {
                    if is_cell_in_match(&m, 5, r, c) {
                        let v = grid.get(r, c).unwrap();
                        prop_assert!(v == FREE_CELL || called.contains(&v));
                    }
                }
            }
        }
    }
}
