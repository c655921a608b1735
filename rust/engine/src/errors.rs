use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unsupported bingo variant: {0}")]
    UnsupportedVariant(String),
    #[error("Column {column} range {min}..={max} holds {available} values, card needs {required}")]
    InsufficientRange {
        column: usize,
        min: u32,
        max: u32,
        available: u32,
        required: u32,
    },
    #[error("Number of cards must be at least 1 (got {0})")]
    InvalidCardCount(usize),
    #[error("Free space index {index} is outside a grid of {cells} cells")]
    InvalidFreeSpaceIndex { index: usize, cells: usize },
    #[error("Value {0} is not a ball in this variant")]
    InvalidValue(u32),
    #[error("Reset clears every called value and must be confirmed")]
    ResetNotConfirmed,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Reason a stored or hand-authored configuration was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    MalformedJson(String),
    MissingField,
    UnknownField,
    WrongType { expected: &'static str },
    NonPositive,
    SizeMismatch { expected: usize, actual: usize },
    CountMismatch { declared: usize, actual: usize },
    OutOfRange { value: u32, min: u32, max: u32 },
    DuplicateValue(u32),
    FreeCellMisplaced { expected: usize, actual: usize },
    MissingFreeCell { expected: usize },
    UnexpectedFreeCell,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationErrorKind::MalformedJson(msg) => write!(f, "malformed JSON: {}", msg),
            ValidationErrorKind::MissingField => write!(f, "required field is missing"),
            ValidationErrorKind::UnknownField => write!(f, "unknown field"),
            ValidationErrorKind::WrongType { expected } => write!(f, "expected {}", expected),
            ValidationErrorKind::NonPositive => write!(f, "must be a positive integer"),
            ValidationErrorKind::SizeMismatch { expected, actual } => {
                write!(f, "expected {} entries, found {}", expected, actual)
            }
            ValidationErrorKind::CountMismatch { declared, actual } => write!(
                f,
                "numberOfCards declares {} cards but {} were supplied",
                declared, actual
            ),
            ValidationErrorKind::OutOfRange { value, min, max } => {
                write!(f, "value {} outside column range {}..={}", value, min, max)
            }
            ValidationErrorKind::DuplicateValue(v) => write!(f, "value {} repeated in column", v),
            ValidationErrorKind::FreeCellMisplaced { expected, actual } => write!(
                f,
                "free cell at index {} but variant requires it at index {}",
                actual, expected
            ),
            ValidationErrorKind::MissingFreeCell { expected } => {
                write!(f, "card has no free cell at index {}", expected)
            }
            ValidationErrorKind::UnexpectedFreeCell => {
                write!(f, "free cell not allowed here")
            }
        }
    }
}

/// A validation failure pinned to a field path such as `cards[3][1][4]`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{path}: {kind}")]
pub struct ValidationError {
    pub path: String,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, kind: ValidationErrorKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn is_count_mismatch(&self) -> bool {
        matches!(self.kind, ValidationErrorKind::CountMismatch { .. })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("No live session for event {0}")]
    NotFound(String),
    #[error("Session storage lock poisoned")]
    StoragePoisoned,
    #[error(transparent)]
    Engine(#[from] EngineError),
}
