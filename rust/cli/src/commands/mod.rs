//! Command handler modules for the bingo CLI.
//!
//! Each command lives in its own file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in by the caller
//! - All errors propagated via the `CliError` enum

mod call;
mod cfg;
mod check;
mod generate;
mod show;
mod validate;
mod variants;

pub use call::{handle_call_command, handle_reset_command, handle_uncall_command};
pub use cfg::handle_cfg_command;
pub use check::handle_check_command;
pub use generate::handle_generate_command;
pub use show::handle_show_command;
pub use validate::handle_validate_command;
pub use variants::handle_variants_command;

use bingo_engine::codec::{BingoConfig, ConfigCodec};
use bingo_engine::variant::{self, BingoTypeDef};

use crate::config;
use crate::error::CliError;
use crate::io_utils;

/// Variant named on the command line, else the configured default.
pub(crate) fn resolve_variant(flag: Option<&str>) -> Result<&'static BingoTypeDef, CliError> {
    let id = match flag {
        Some(id) => id.to_string(),
        None => {
            config::load_with_sources()
                .map_err(|e| CliError::Config(e.to_string()))?
                .config
                .variant
        }
    };
    Ok(variant::lookup(&id)?)
}

/// Reads and validates a configuration blob from disk.
pub(crate) fn load_bingo_config(
    path: &str,
    def: &BingoTypeDef,
    free_index: Option<usize>,
) -> Result<BingoConfig, CliError> {
    let raw = io_utils::read_text(path)?;
    let mut codec = ConfigCodec::new(def);
    if let Some(idx) = free_index {
        codec = codec.with_free_space_index(idx)?;
    }
    Ok(codec.decode_str(&raw)?)
}
