use serde::{Deserialize, Serialize};

/// Mutation applied to a live call set.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallAction {
    Call,
    Uncall,
    Reset,
}

/// One line of the call audit trail.
/// Serialized to JSONL so a session can be reviewed or replayed after the fact.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    /// Event the call belongs to
    pub event_id: String,
    /// Position in the log, starting at 1
    pub seq: u64,
    pub action: CallAction,
    /// Ball value; absent for resets
    #[serde(default)]
    pub value: Option<u32>,
    /// Whether the call set actually changed (false for repeated submits)
    pub changed: bool,
    /// Timestamp (RFC3339), filled in on write when missing
    #[serde(default)]
    pub ts: Option<String>,
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct CallLogger {
    writer: BufWriter<File>,
    event_id: String,
    seq: u64,
}

impl CallLogger {
    /// Opens `path` for appending; `seq` continues from `start_seq`.
    pub fn append<P: AsRef<Path>>(path: P, event_id: &str, start_seq: u64) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
            event_id: event_id.to_string(),
            seq: start_seq,
        })
    }

    pub fn record(
        &mut self,
        action: CallAction,
        value: Option<u32>,
        changed: bool,
    ) -> std::io::Result<CallRecord> {
        self.seq += 1;
        let rec = CallRecord {
            event_id: self.event_id.clone(),
            seq: self.seq,
            action,
            value,
            changed,
            ts: None,
        };
        self.write(&rec)?;
        Ok(rec)
    }

    pub fn write(&mut self, record: &CallRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

impl std::fmt::Debug for CallLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallLogger")
            .field("event_id", &self.event_id)
            .field("seq", &self.seq)
            .finish()
    }
}

/// Number of records already in a JSONL call log, used to resume numbering.
pub fn count_records(content: &str) -> u64 {
    content.lines().filter(|l| !l.trim().is_empty()).count() as u64
}
