//! Show command: render one card the way a player view would.

use super::{load_bingo_config, resolve_variant};
use crate::error::CliError;
use crate::formatters::{format_grid, format_match};
use crate::io_utils;
use bingo_engine::coordinator::CalledState;
use bingo_engine::win::has_bingo;
use std::io::Write;

pub fn handle_show_command(
    config_path: &str,
    card: usize,
    play_data: Option<&str>,
    variant_flag: Option<&str>,
    free_index: Option<usize>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let def = resolve_variant(variant_flag)?;
    let cfg = load_bingo_config(config_path, def, free_index)?;
    let stored = cfg.cards.get(card).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "card {} does not exist (configuration has {})",
            card, cfg.number_of_cards
        ))
    })?;
    let called = match play_data {
        Some(path) => io_utils::read_play_data_or_empty(path)?,
        None => CalledState::new(),
    };

    let grid = stored.to_grid();
    let line = has_bingo(&grid, called.values());
    writeln!(out, "Card {}", card)?;
    writeln!(out, "{}", format_grid(&grid, called.values(), line.as_ref()))?;
    match line {
        Some(m) => writeln!(out, "BINGO: {}", format_match(&m))?,
        None => writeln!(out, "No bingo yet ({} called)", called.len())?,
    }
    Ok(())
}
