//! Generate command: produce a card configuration blob.
//!
//! Settings resolve flag > environment > config file > default. The seed in
//! use is always reported on stderr so any batch can be regenerated.

use crate::config;
use crate::error::CliError;
use crate::io_utils;
use crate::ui;
use bingo_engine::codec::encode_string;
use bingo_engine::generator::CardGenerator;
use bingo_engine::variant;
use std::io::Write;

/// Handle the generate command.
///
/// # Arguments
///
/// * `variant_flag` - Variant id from `--type`
/// * `cards` - Card count from `--cards`
/// * `seed` - RNG seed from `--seed`
/// * `free_index` - Free cell position from `--free-index`
/// * `output` - Destination file; JSON goes to `out` when `None`
pub fn handle_generate_command(
    variant_flag: Option<String>,
    cards: Option<u32>,
    seed: Option<u64>,
    free_index: Option<usize>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    let cfg = resolved.config;

    let variant_id = variant_flag.unwrap_or(cfg.variant);
    let def = variant::lookup(&variant_id)?;
    let count = cards.map(|c| c as usize).unwrap_or(cfg.cards);
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    if free_index.is_some() && !def.free_space {
        ui::warn_parameter_unused(err, "free-index", "variant has no free cell")?;
    }

    let mut generator = CardGenerator::new_with_seed(seed);
    let config = generator.generate_config(def.id, count, free_index)?;
    let json = encode_string(&config).map_err(std::io::Error::other)?;

    tracing::info!(variant = def.id, cards = count, seed, "generated card configuration");
    writeln!(err, "Generated {} {} cards (seed {})", count, def.id, seed)?;

    match output {
        Some(path) => {
            io_utils::write_text(&path, &json)?;
            writeln!(out, "Wrote {}", path)?;
        }
        None => writeln!(out, "{}", json)?,
    }
    Ok(())
}
