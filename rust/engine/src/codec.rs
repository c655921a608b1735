//! Validation and serialization of the two persisted blobs.
//!
//! The configuration blob (`{"size", "numberOfCards", "cards"}`) is the only
//! trust boundary for card data: administrators may hand-edit it, so
//! [`ConfigCodec::decode`] re-checks every structural rule and reports the
//! first violation with its field path. Nothing is coerced or dropped.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::card::{flat_index, BingoCard, FREE_CELL};
use crate::coordinator::CalledState;
use crate::errors::{EngineError, ValidationError, ValidationErrorKind as Kind};
use crate::variant::BingoTypeDef;

const ROOT: &str = "$";
const FIELDS: [&str; 3] = ["size", "numberOfCards", "cards"];

/// Configuration persisted per bingo event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BingoConfig {
    pub size: usize,
    pub number_of_cards: usize,
    pub cards: Vec<BingoCard>,
}

/// Schema-checking codec bound to one variant.
#[derive(Debug, Clone, Copy)]
pub struct ConfigCodec<'a> {
    variant: &'a BingoTypeDef,
    free_space_index: Option<usize>,
}

impl<'a> ConfigCodec<'a> {
    /// Codec expecting the variant's default free-cell placement.
    pub fn new(variant: &'a BingoTypeDef) -> Self {
        Self {
            variant,
            free_space_index: variant.default_free_space_index(),
        }
    }

    /// Pins the free cell to a non-default flattened index.
    ///
    /// Ignored for variants without a free cell. An index off the grid is
    /// [`EngineError::InvalidFreeSpaceIndex`], as it is for the generator.
    pub fn with_free_space_index(mut self, index: usize) -> Result<Self, EngineError> {
        if !self.variant.free_space {
            return Ok(self);
        }
        let cells = self.variant.cells();
        if index >= cells {
            return Err(EngineError::InvalidFreeSpaceIndex { index, cells });
        }
        self.free_space_index = Some(index);
        Ok(self)
    }

    pub fn variant(&self) -> &BingoTypeDef {
        self.variant
    }

    pub fn decode_str(&self, raw: &str) -> Result<BingoConfig, ValidationError> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| ValidationError::new(ROOT, Kind::MalformedJson(e.to_string())))?;
        self.decode(&value)
    }

    pub fn decode(&self, raw: &Value) -> Result<BingoConfig, ValidationError> {
        let obj = raw
            .as_object()
            .ok_or_else(|| ValidationError::new(ROOT, Kind::WrongType { expected: "object" }))?;
        if let Some(key) = obj.keys().find(|k| !FIELDS.contains(&k.as_str())) {
            return Err(ValidationError::new(key.as_str(), Kind::UnknownField));
        }

        let size = positive_field(obj, "size")?;
        if size != self.variant.size {
            return Err(ValidationError::new(
                "size",
                Kind::SizeMismatch {
                    expected: self.variant.size,
                    actual: size,
                },
            ));
        }
        let declared = positive_field(obj, "numberOfCards")?;

        let cards = obj
            .get("cards")
            .ok_or_else(|| ValidationError::new("cards", Kind::MissingField))?
            .as_array()
            .ok_or_else(|| ValidationError::new("cards", Kind::WrongType { expected: "array" }))?;
        if cards.len() != declared {
            return Err(ValidationError::new(
                "cards",
                Kind::CountMismatch {
                    declared,
                    actual: cards.len(),
                },
            ));
        }

        let cards = cards
            .iter()
            .enumerate()
            .map(|(i, card)| self.decode_card(&format!("cards[{}]", i), card))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BingoConfig {
            size,
            number_of_cards: declared,
            cards,
        })
    }

    fn decode_card(&self, path: &str, raw: &Value) -> Result<BingoCard, ValidationError> {
        let size = self.variant.size;
        let columns = sized_array(path, raw, size)?;
        let mut free_cells: Vec<(usize, String)> = Vec::new();
        let mut out = Vec::with_capacity(size);

        for (c, raw_column) in columns.iter().enumerate() {
            let col_path = format!("{}[{}]", path, c);
            let range = self.variant.columns[c];
            let mut seen = HashSet::with_capacity(size);
            let mut column = Vec::with_capacity(size);
            for (r, cell) in sized_array(&col_path, raw_column, size)?.iter().enumerate() {
                let cell_path = format!("{}[{}]", col_path, r);
                let value = cell_value(&cell_path, cell)?;
                if value == FREE_CELL {
                    if !self.variant.free_space || !free_cells.is_empty() {
                        return Err(ValidationError::new(cell_path, Kind::UnexpectedFreeCell));
                    }
                    free_cells.push((flat_index(size, r, c), cell_path));
                } else if !range.contains(value) {
                    return Err(ValidationError::new(
                        cell_path,
                        Kind::OutOfRange {
                            value,
                            min: range.min,
                            max: range.max,
                        },
                    ));
                } else if !seen.insert(value) {
                    return Err(ValidationError::new(cell_path, Kind::DuplicateValue(value)));
                }
                column.push(value);
            }
            out.push(column);
        }

        if let Some(expected) = self.free_space_index {
            match free_cells.first() {
                None => {
                    return Err(ValidationError::new(path, Kind::MissingFreeCell { expected }));
                }
                Some((actual, cell_path)) if *actual != expected => {
                    return Err(ValidationError::new(
                        cell_path.as_str(),
                        Kind::FreeCellMisplaced {
                            expected,
                            actual: *actual,
                        },
                    ));
                }
                Some(_) => {}
            }
        }

        BingoCard::from_columns(out)
            .map_err(|e| ValidationError::new(format!("{}{}", path, e.path), e.kind))
    }
}

/// Inverse of [`ConfigCodec::decode`] for any well-formed configuration.
pub fn encode(config: &BingoConfig) -> Value {
    let cards: Vec<Value> = config
        .cards
        .iter()
        .map(|card| {
            Value::Array(
                card.columns()
                    .iter()
                    .map(|col| Value::Array(col.iter().map(|v| Value::from(*v)).collect()))
                    .collect(),
            )
        })
        .collect();
    let mut obj = Map::new();
    obj.insert("size".into(), Value::from(config.size));
    obj.insert("numberOfCards".into(), Value::from(config.number_of_cards));
    obj.insert("cards".into(), Value::Array(cards));
    Value::Object(obj)
}

/// Pretty JSON of [`encode`], as written to disk.
pub fn encode_string(config: &BingoConfig) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&encode(config))
}

/// Decodes `{"calledValues": [...]}`. Duplicates collapse; ordering is not kept.
pub fn decode_play_data(raw: &Value) -> Result<CalledState, ValidationError> {
    CalledState::deserialize_checked(raw)
}

pub fn decode_play_data_str(raw: &str) -> Result<CalledState, ValidationError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| ValidationError::new(ROOT, Kind::MalformedJson(e.to_string())))?;
    decode_play_data(&value)
}

/// Encodes play data with values sorted ascending.
pub fn encode_play_data(state: &CalledState) -> Value {
    let values: Vec<Value> = state.values().iter().map(|v| Value::from(*v)).collect();
    let mut obj = Map::new();
    obj.insert("calledValues".into(), Value::Array(values));
    Value::Object(obj)
}

fn positive_field(obj: &Map<String, Value>, name: &str) -> Result<usize, ValidationError> {
    let raw = obj
        .get(name)
        .ok_or_else(|| ValidationError::new(name, Kind::MissingField))?;
    let n = raw.as_u64().ok_or_else(|| {
        ValidationError::new(
            name,
            Kind::WrongType {
                expected: "positive integer",
            },
        )
    })?;
    if n == 0 {
        return Err(ValidationError::new(name, Kind::NonPositive));
    }
    usize::try_from(n).map_err(|_| {
        ValidationError::new(
            name,
            Kind::WrongType {
                expected: "positive integer",
            },
        )
    })
}

fn sized_array<'v>(path: &str, raw: &'v Value, size: usize) -> Result<&'v [Value], ValidationError> {
    let items = raw
        .as_array()
        .ok_or_else(|| ValidationError::new(path, Kind::WrongType { expected: "array" }))?;
    if items.len() != size {
        return Err(ValidationError::new(
            path,
            Kind::SizeMismatch {
                expected: size,
                actual: items.len(),
            },
        ));
    }
    Ok(items)
}

fn cell_value(path: &str, raw: &Value) -> Result<u32, ValidationError> {
    raw.as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| {
            ValidationError::new(
                path,
                Kind::WrongType {
                    expected: "non-negative integer",
                },
            )
        })
}
