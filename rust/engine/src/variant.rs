use serde::Serialize;

use crate::errors::EngineError;

/// Inclusive range of ball numbers that may appear in one column.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct NumberRange {
    pub min: u32,
    pub max: u32,
}

impl NumberRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Number of distinct values the range can supply.
    pub fn len(&self) -> u32 {
        if self.max < self.min {
            0
        } else {
            self.max - self.min + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Static definition of a bingo variant: grid size, column ranges and free-cell rule.
///
/// `columns.len() == size` holds for every registered entry.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BingoTypeDef {
    pub id: &'static str,
    pub label: &'static str,
    pub size: usize,
    pub columns: &'static [NumberRange],
    pub free_space: bool,
}

impl BingoTypeDef {
    pub fn cells(&self) -> usize {
        self.size * self.size
    }

    /// Center cell for odd-sized variants that reserve a free cell.
    pub fn default_free_space_index(&self) -> Option<usize> {
        if self.free_space && self.size % 2 == 1 {
            Some(self.cells() / 2)
        } else {
            None
        }
    }

    /// Column whose range holds `value`, if any.
    pub fn column_for(&self, value: u32) -> Option<usize> {
        self.columns.iter().position(|r| r.contains(value))
    }

    /// Whether `value` is a ball of this variant. The free sentinel is not.
    pub fn contains(&self, value: u32) -> bool {
        value != crate::card::FREE_CELL && self.column_for(value).is_some()
    }

    /// Every ball of the variant in ascending column order.
    pub fn universe(&self) -> impl Iterator<Item = u32> + '_ {
        self.columns
            .iter()
            .flat_map(|r| r.min..=r.max)
            .filter(|v| *v != crate::card::FREE_CELL)
    }
}

const COLUMNS_75: [NumberRange; 5] = [
    NumberRange::new(1, 15),
    NumberRange::new(16, 30),
    NumberRange::new(31, 45),
    NumberRange::new(46, 60),
    NumberRange::new(61, 75),
];

const COLUMNS_27: [NumberRange; 3] = [
    NumberRange::new(1, 9),
    NumberRange::new(10, 18),
    NumberRange::new(19, 27),
];

static VARIANTS: [BingoTypeDef; 2] = [
    BingoTypeDef {
        id: "75-ball",
        label: "75-ball (B-I-N-G-O)",
        size: 5,
        columns: &COLUMNS_75,
        free_space: true,
    },
    BingoTypeDef {
        id: "mini-27",
        label: "27-ball mini card",
        size: 3,
        columns: &COLUMNS_27,
        free_space: true,
    },
];

/// Id used when a caller does not name a variant.
pub const DEFAULT_VARIANT: &str = "75-ball";

/// All registered variants in declaration order.
pub fn variants() -> &'static [BingoTypeDef] {
    &VARIANTS
}

pub fn lookup(type_id: &str) -> Result<&'static BingoTypeDef, EngineError> {
    VARIANTS
        .iter()
        .find(|v| v.id == type_id)
        .ok_or_else(|| EngineError::UnsupportedVariant(type_id.to_string()))
}

pub fn is_supported_type(type_id: &str) -> bool {
    VARIANTS.iter().any(|v| v.id == type_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_one_range_per_column() {
        for v in variants() {
            assert_eq!(v.columns.len(), v.size, "variant {}", v.id);
        }
    }

    #[test]
    fn range_len_handles_inverted_bounds() {
        assert_eq!(NumberRange::new(1, 15).len(), 15);
        assert_eq!(NumberRange::new(5, 5).len(), 1);
        assert!(NumberRange::new(6, 5).is_empty());
    }

    #[test]
    fn center_is_default_free_cell_for_odd_grids() {
        let v = lookup("75-ball").unwrap();
        assert_eq!(v.default_free_space_index(), Some(12));
        let mini = lookup("mini-27").unwrap();
        assert_eq!(mini.default_free_space_index(), Some(4));
    }

    #[test]
    fn universe_covers_all_columns() {
        let v = lookup("75-ball").unwrap();
        let all: Vec<u32> = v.universe().collect();
        assert_eq!(all.len(), 75);
        assert_eq!(all.first(), Some(&1));
        assert_eq!(all.last(), Some(&75));
        assert!(!v.contains(0));
        assert!(!v.contains(76));
        assert_eq!(v.column_for(31), Some(2));
    }
}
