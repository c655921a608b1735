//! File helpers for the two persisted blobs.
//!
//! The CLI stands in for the storage collaborator: configuration and play
//! data are plain JSON files, read and written verbatim.

use std::path::Path;

use bingo_engine::codec::{decode_play_data_str, encode_play_data};
use bingo_engine::coordinator::CalledState;

use crate::error::CliError;

/// Read a text file, stripping a leading UTF-8 BOM if present.
pub fn read_text(path: &str) -> Result<String, CliError> {
    let mut content = std::fs::read_to_string(path)
        .map_err(|e| CliError::InvalidInput(format!("cannot read {}: {}", path, e)))?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Write `content` plus a trailing newline, creating parent directories first.
pub fn write_text(path: &str, content: &str) -> Result<(), CliError> {
    let p = Path::new(path);
    ensure_parent_dir(p).map_err(CliError::InvalidInput)?;
    let mut body = content.to_string();
    if !body.ends_with('\n') {
        body.push('\n');
    }
    std::fs::write(p, body)?;
    Ok(())
}

/// Load play data, treating a missing file as a fresh event with nothing called.
pub fn read_play_data_or_empty(path: &str) -> Result<CalledState, CliError> {
    if !Path::new(path).exists() {
        return Ok(CalledState::new());
    }
    let raw = read_text(path)?;
    Ok(decode_play_data_str(&raw)?)
}

pub fn write_play_data(path: &str, state: &CalledState) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(&encode_play_data(state))
        .map_err(std::io::Error::other)?;
    write_text(path, &json)
}

/// Ensure parent directory exists for given path, creating if needed.
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
