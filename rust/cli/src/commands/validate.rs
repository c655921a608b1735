//! Validate command: check a stored or hand-edited configuration.

use super::{load_bingo_config, resolve_variant};
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Decodes `input` against the variant and reports the first violation.
///
/// Returns `Err(CliError::Validation)` (exit code 2) when the file is rejected.
pub fn handle_validate_command(
    input: &str,
    variant_flag: Option<&str>,
    free_index: Option<usize>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let def = resolve_variant(variant_flag)?;
    match load_bingo_config(input, def, free_index) {
        Ok(cfg) => {
            writeln!(
                out,
                "OK: {} cards, {}x{} ({})",
                cfg.number_of_cards, cfg.size, cfg.size, def.id
            )?;
            Ok(())
        }
        Err(CliError::Validation(e)) => {
            tracing::warn!(input, path = %e.path, "configuration rejected");
            ui::write_error(err, &format!("{} is invalid: {}", input, e))?;
            Err(CliError::Validation(e))
        }
        Err(other) => Err(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reports_ok_for_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(
            &path,
            r#"{"size":3,"numberOfCards":1,"cards":[[[1,2,3],[10,0,12],[19,20,21]]]}"#,
        )
        .unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_validate_command(path.to_str().unwrap(), Some("mini-27"), None, &mut out, &mut err)
            .unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("OK: 1 cards"));
    }

    #[test]
    fn reports_path_for_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(
            &path,
            r#"{"size":3,"numberOfCards":2,"cards":[[[1,2,3],[10,0,12],[19,20,21]]]}"#,
        )
        .unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result =
            handle_validate_command(path.to_str().unwrap(), Some("mini-27"), None, &mut out, &mut err);
        assert!(matches!(result, Err(CliError::Validation(ref e)) if e.is_count_mismatch()));
        let stderr = String::from_utf8(err).unwrap();
        assert!(stderr.contains("cards:"), "stderr was {}", stderr);
    }
}
