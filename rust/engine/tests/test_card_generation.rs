use std::collections::HashSet;

use bingo_engine::card::FREE_CELL;
use bingo_engine::errors::EngineError;
use bingo_engine::generator::CardGenerator;
use bingo_engine::variant;
use proptest::prelude::*;

#[test]
fn unknown_variant_is_rejected() {
    let mut gen = CardGenerator::new_with_seed(1);
    assert_eq!(
        gen.generate("90-ball", 3, None),
        Err(EngineError::UnsupportedVariant("90-ball".to_string()))
    );
}

#[test]
fn same_seed_reproduces_cards() {
    let a = CardGenerator::new_with_seed(12345)
        .generate("75-ball", 5, None)
        .unwrap();
    let b = CardGenerator::new_with_seed(12345)
        .generate("75-ball", 5, None)
        .unwrap();
    assert_eq!(a, b, "same seed must yield identical cards");
}

#[test]
fn different_seeds_differ() {
    let a = CardGenerator::new_with_seed(1)
        .generate("75-ball", 3, None)
        .unwrap();
    let b = CardGenerator::new_with_seed(2)
        .generate("75-ball", 3, None)
        .unwrap();
    assert_ne!(a, b, "different seeds should produce different cards (high probability)");
}

#[test]
fn cards_in_a_batch_are_drawn_independently() {
    let cards = CardGenerator::new_with_seed(99)
        .generate("75-ball", 20, None)
        .unwrap();
    let unique: HashSet<_> = cards.iter().collect();
    assert!(unique.len() > 1, "a batch should not repeat one card");
}

#[test]
fn config_packaging_reports_size_and_count() {
    let cfg = CardGenerator::new_with_seed(5)
        .generate_config("mini-27", 4, None)
        .unwrap();
    assert_eq!(cfg.size, 3);
    assert_eq!(cfg.number_of_cards, 4);
    assert_eq!(cfg.cards.len(), 4);
}

#[test]
fn entropy_generator_produces_valid_cards() {
    let cards = CardGenerator::from_entropy()
        .generate("75-ball", 2, None)
        .unwrap();
    assert!(cards.iter().all(|c| c.free_cells() == vec![12]));
}

proptest! {
    #[test]
    fn generated_cards_hold_column_invariants(
        seed in any::<u64>(),
        count in 1usize..8,
        free in 0usize..25,
    ) {
        let def = variant::lookup("75-ball").unwrap();
        let cards = CardGenerator::new_with_seed(seed)
            .generate("75-ball", count, Some(free))
            .unwrap();
        prop_assert_eq!(cards.len(), count);
        for card in &cards {
            prop_assert_eq!(card.size(), 5);
            for (c, column) in card.columns().iter().enumerate() {
                let range = def.columns[c];
                let mut seen = HashSet::new();
                for v in column.iter().copied().filter(|v| *v != FREE_CELL) {
                    prop_assert!(range.contains(v), "value {} outside column {}", v, c);
                    prop_assert!(seen.insert(v), "value {} repeated in column {}", v, c);
                }
            }
            prop_assert_eq!(card.free_cells(), vec![free]);
        }
    }

    #[test]
    fn mini_cards_keep_center_free(seed in any::<u64>()) {
        let cards = CardGenerator::new_with_seed(seed)
            .generate("mini-27", 3, None)
            .unwrap();
        for card in &cards {
            prop_assert_eq!(card.get(1, 1), Some(FREE_CELL));
            prop_assert_eq!(card.free_cells().len(), 1);
        }
    }
}
