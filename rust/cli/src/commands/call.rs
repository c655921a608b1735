//! Call, uncall and reset against a play-data file.
//!
//! The file is the persisted call set; each invocation restores a
//! coordinator from it, applies one mutation and writes it back when the
//! set changed. Repeating a command is harmless.

use super::resolve_variant;
use crate::error::CliError;
use crate::io_utils;
use bingo_engine::coordinator::{LiveCallCoordinator, ResetConfirmation};
use bingo_engine::logger::{count_records, CallAction, CallLogger};
use std::io::Write;
use std::path::Path;

pub fn handle_call_command(
    play_data: &str,
    value: u32,
    variant_flag: Option<&str>,
    log: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut live = restore(play_data, variant_flag)?;
    let changed = live.call(value)?;
    persist(play_data, &live, changed, log, CallAction::Call, Some(value))?;
    if changed {
        writeln!(out, "Called {} ({} called)", value, live.called_values().len())?;
    } else {
        writeln!(out, "{} was already called", value)?;
    }
    Ok(())
}

pub fn handle_uncall_command(
    play_data: &str,
    value: u32,
    variant_flag: Option<&str>,
    log: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut live = restore(play_data, variant_flag)?;
    let changed = live.uncall(value)?;
    persist(play_data, &live, changed, log, CallAction::Uncall, Some(value))?;
    if changed {
        writeln!(out, "Uncalled {} ({} called)", value, live.called_values().len())?;
    } else {
        writeln!(out, "{} was not called", value)?;
    }
    Ok(())
}

pub fn handle_reset_command(
    play_data: &str,
    confirmed: bool,
    variant_flag: Option<&str>,
    log: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut live = restore(play_data, variant_flag)?;
    let cleared = live.reset(ResetConfirmation::from(confirmed))?;
    persist(play_data, &live, true, log, CallAction::Reset, None)?;
    writeln!(out, "Reset: cleared {} called values", cleared)?;
    Ok(())
}

fn restore(play_data: &str, variant_flag: Option<&str>) -> Result<LiveCallCoordinator, CliError> {
    let def = resolve_variant(variant_flag)?;
    let state = io_utils::read_play_data_or_empty(play_data)?;
    Ok(LiveCallCoordinator::restore(def, state)?)
}

fn persist(
    play_data: &str,
    live: &LiveCallCoordinator,
    changed: bool,
    log: Option<&str>,
    action: CallAction,
    value: Option<u32>,
) -> Result<(), CliError> {
    if changed || !Path::new(play_data).exists() {
        io_utils::write_play_data(play_data, &live.snapshot())?;
    }
    if let Some(log_path) = log {
        let existing = if Path::new(log_path).exists() {
            count_records(&io_utils::read_text(log_path)?)
        } else {
            0
        };
        let mut logger = CallLogger::append(log_path, &event_id(play_data), existing)?;
        logger.record(action, value, changed)?;
    }
    Ok(())
}

/// Event id for the audit log: the play-data file name without extension.
fn event_id(play_data: &str) -> String {
    Path::new(play_data)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| play_data.to_string())
}
