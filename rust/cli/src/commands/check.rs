//! Check command: the caller's view of which cards have won.
//!
//! No win state is stored anywhere; it is recomputed from the configuration
//! and the current play data on every run.

use super::{load_bingo_config, resolve_variant};
use crate::error::CliError;
use crate::formatters::format_match;
use crate::io_utils;
use bingo_engine::win::find_winners;
use std::io::Write;

pub fn handle_check_command(
    config_path: &str,
    play_data: &str,
    variant_flag: Option<&str>,
    free_index: Option<usize>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let def = resolve_variant(variant_flag)?;
    let cfg = load_bingo_config(config_path, def, free_index)?;
    let called = io_utils::read_play_data_or_empty(play_data)?;

    let winners = find_winners(&cfg, called.values());
    writeln!(
        out,
        "{} called, {} of {} cards with bingo",
        called.len(),
        winners.len(),
        cfg.number_of_cards
    )?;
    for w in &winners {
        writeln!(out, "card {}: {}", w.card_index, format_match(&w.line))?;
    }
    Ok(())
}
