//! `variants` command: list the variant registry.

use crate::error::CliError;
use bingo_engine::variant;
use std::io::Write;

pub fn handle_variants_command(out: &mut dyn Write) -> Result<(), CliError> {
    for def in variant::variants() {
        let ranges: Vec<String> = def
            .columns
            .iter()
            .map(|r| format!("{}-{}", r.min, r.max))
            .collect();
        writeln!(
            out,
            "{:<10} {}x{} balls={} free={} columns=[{}]  {}",
            def.id,
            def.size,
            def.size,
            def.universe().count(),
            if def.free_space { "yes" } else { "no" },
            ranges.join(", "),
            def.label
        )?;
    }
    Ok(())
}
