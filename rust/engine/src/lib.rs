//! # bingo-engine: Bingo Game Engine Core
//!
//! Card generation, configuration validation, live ball calling and win
//! detection for arbitrary bingo variants. Generation is reproducible with a
//! seeded ChaCha20 RNG; everything else is a pure function of plain data.
//!
//! ## Core Modules
//!
//! - [`variant`] - Registry of supported variants (grid size, column ranges, free cell)
//! - [`card`] - Column-major card storage and the row-major grid used for detection
//! - [`generator`] - Seeded card generation
//! - [`codec`] - Validation and serialization of the configuration and play-data blobs
//! - [`win`] - Win detection and line highlighting
//! - [`coordinator`] - Authoritative called-values state for one running event
//! - [`session`] - Thread-safe registry of live sessions keyed by event
//! - [`logger`] - JSONL audit trail of call, uncall and reset
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use bingo_engine::coordinator::LiveCallCoordinator;
//! use bingo_engine::generator::CardGenerator;
//! use bingo_engine::variant;
//! use bingo_engine::win::has_bingo;
//!
//! let mut gen = CardGenerator::new_with_seed(7);
//! let config = gen.generate_config("75-ball", 2, None).unwrap();
//!
//! let mut live = LiveCallCoordinator::new(variant::lookup("75-ball").unwrap());
//! // call the whole first row of card 0 (the free cell is in row 2)
//! let grid = config.cards[0].to_grid();
//! for v in &grid.rows()[0] {
//!     live.call(*v).unwrap();
//! }
//! assert!(has_bingo(&grid, live.called_values()).is_some());
//! ```
//!
//! ## Validating Stored Configuration
//!
//! ```rust
//! use bingo_engine::codec::{encode, ConfigCodec};
//! use bingo_engine::generator::CardGenerator;
//! use bingo_engine::variant;
//!
//! let config = CardGenerator::new_with_seed(1)
//!     .generate_config("75-ball", 10, None)
//!     .unwrap();
//! let codec = ConfigCodec::new(variant::lookup("75-ball").unwrap());
//! assert_eq!(codec.decode(&encode(&config)).unwrap(), config);
//! ```

pub mod card;
pub mod codec;
pub mod coordinator;
pub mod errors;
pub mod generator;
pub mod logger;
pub mod session;
pub mod variant;
pub mod win;
