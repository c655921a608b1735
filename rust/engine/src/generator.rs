use rand::seq::index;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::card::{cell_of, BingoCard, FREE_CELL};
use crate::codec::BingoConfig;
use crate::errors::EngineError;
use crate::variant::{self, BingoTypeDef};

/// Produces batches of independent cards for a registered variant.
///
/// # Examples
///
/// ```
/// use bingo_engine::generator::CardGenerator;
///
/// let mut gen = CardGenerator::new_with_seed(42);
/// let cards = gen.generate("75-ball", 3, None).unwrap();
/// assert_eq!(cards.len(), 3);
/// assert_eq!(cards[0].get(2, 2), Some(0)); // center free cell
///
/// // Same seed, same cards
/// let again = CardGenerator::new_with_seed(42).generate("75-ball", 3, None).unwrap();
/// assert_eq!(cards, again);
/// ```
#[derive(Debug)]
pub struct CardGenerator {
    rng: ChaCha20Rng,
}

impl CardGenerator {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Non-deterministic generator for production use.
    pub fn from_entropy() -> Self {
        Self::new_with_seed(rand::random())
    }

    /// Generates `number_of_cards` cards for `type_id`.
    ///
    /// `free_space_index` is a row-major flattened index; `None` picks the
    /// variant's default (the center). It is ignored for variants without a
    /// free cell.
    ///
    /// # Errors
    ///
    /// - [`EngineError::UnsupportedVariant`] for an unknown `type_id`
    /// - [`EngineError::InvalidCardCount`] when `number_of_cards == 0`
    /// - [`EngineError::InvalidFreeSpaceIndex`] when the index is off the grid
    /// - [`EngineError::InsufficientRange`] when a column cannot supply enough distinct values
    pub fn generate(
        &mut self,
        type_id: &str,
        number_of_cards: usize,
        free_space_index: Option<usize>,
    ) -> Result<Vec<BingoCard>, EngineError> {
        let def = variant::lookup(type_id)?;
        self.generate_for(def, number_of_cards, free_space_index)
    }

    pub fn generate_for(
        &mut self,
        def: &BingoTypeDef,
        number_of_cards: usize,
        free_space_index: Option<usize>,
    ) -> Result<Vec<BingoCard>, EngineError> {
        if number_of_cards == 0 {
            return Err(EngineError::InvalidCardCount(number_of_cards));
        }
        let free = resolve_free_cell(def, free_space_index)?;
        check_ranges(def, free)?;

        let cards = (0..number_of_cards)
            .map(|_| self.draw_card(def, free))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            variant = def.id,
            cards = cards.len(),
            free_cell = ?free,
            "generated bingo cards"
        );
        Ok(cards)
    }

    /// Generates cards and packages them as a persistable configuration.
    pub fn generate_config(
        &mut self,
        type_id: &str,
        number_of_cards: usize,
        free_space_index: Option<usize>,
    ) -> Result<BingoConfig, EngineError> {
        let def = variant::lookup(type_id)?;
        let cards = self.generate_for(def, number_of_cards, free_space_index)?;
        Ok(BingoConfig {
            size: def.size,
            number_of_cards: cards.len(),
            cards,
        })
    }

    fn draw_card(
        &mut self,
        def: &BingoTypeDef,
        free: Option<(usize, usize)>,
    ) -> Result<BingoCard, EngineError> {
        let size = def.size;
        let mut columns = Vec::with_capacity(size);
        for (c, range) in def.columns.iter().enumerate() {
            let free_row = free.filter(|(_, col)| *col == c).map(|(row, _)| row);
            let needed = size - usize::from(free_row.is_some());
            // distinct offsets, already in random order
            let mut column: Vec<u32> = index::sample(&mut self.rng, range.len() as usize, needed)
                .into_iter()
                .map(|offset| range.min + offset as u32)
                .collect();
            if let Some(row) = free_row {
                column.insert(row, FREE_CELL);
            }
            columns.push(column);
        }
        BingoCard::from_columns(columns).map_err(EngineError::from)
    }
}

/// `(row, col)` of the free cell, if the variant reserves one.
fn resolve_free_cell(
    def: &BingoTypeDef,
    requested: Option<usize>,
) -> Result<Option<(usize, usize)>, EngineError> {
    if !def.free_space {
        return Ok(None);
    }
    let index = match requested.or_else(|| def.default_free_space_index()) {
        Some(i) => i,
        None => return Ok(None),
    };
    if index >= def.cells() {
        return Err(EngineError::InvalidFreeSpaceIndex {
            index,
            cells: def.cells(),
        });
    }
    Ok(Some(cell_of(def.size, index)))
}

fn check_ranges(def: &BingoTypeDef, free: Option<(usize, usize)>) -> Result<(), EngineError> {
    for (c, range) in def.columns.iter().enumerate() {
        let required = def.size - usize::from(free.is_some_and(|(_, col)| col == c));
        if (range.len() as usize) < required {
            return Err(EngineError::InsufficientRange {
                column: c,
                min: range.min,
                max: range.max,
                available: range.len(),
                required: required as u32,
            });
        }
    }
    Ok(())
}
