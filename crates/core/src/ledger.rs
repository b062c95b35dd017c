//! Score ledger - persisted win counts per player name
//!
//! The backing file holds one record per line:
//!
//! ```text
//! Alice : 5
//! Bob : 3
//! ```
//!
//! Loading never fails: a missing file is an empty ledger and unparsable lines
//! are skipped. Every recorded win rewrites the whole file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::LedgerError;

/// Something that wants to hear about match wins.
///
/// The match orchestrator calls this exactly once per won match and never
/// for a conceded one.
pub trait WinRecorder {
    fn report_win(&mut self, name: &str, turns_taken: u32) -> Result<(), LedgerError>;
}

impl<R: WinRecorder + ?Sized> WinRecorder for &mut R {
    fn report_win(&mut self, name: &str, turns_taken: u32) -> Result<(), LedgerError> {
        (**self).report_win(name, turns_taken)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreLedger {
    /// `None` keeps the ledger in memory only.
    path: Option<PathBuf>,
    /// Insertion ordered; ties in [`ScoreLedger::sorted_by_score`] keep this order.
    entries: Vec<(String, u32)>,
}

impl ScoreLedger {
    /// Empty ledger that is never written to disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the ledger backed by `path`.
    ///
    /// A missing or unreadable file yields an empty ledger that will be created
    /// on the first recorded win.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut ledger = match fs::read_to_string(&path) {
            Ok(text) => Self::parse(&text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no ledger yet, starting empty");
                Self::default()
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ledger unreadable, starting empty");
                Self::default()
            }
        };
        ledger.path = Some(path);
        ledger
    }

    /// Parse ledger text. Malformed lines are skipped.
    pub fn parse(text: &str) -> Self {
        let mut ledger = Self::default();
        for (lineno, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_record(line) {
                Some((name, count)) => ledger.upsert(name, count),
                None => warn!(line = lineno + 1, content = line, "skipping malformed ledger line"),
            }
        }
        ledger
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, count)| *count)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[(String, u32)] {
        &self.entries
    }

    /// Add one win for `name` (creating the entry at 1) and persist the ledger.
    ///
    /// The in-memory count is updated even when the write fails.
    pub fn record_win(&mut self, name: &str) -> Result<u32, LedgerError> {
        let count = match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, count)) => {
                // Counts loaded from disk may already sit at the ceiling.
                *count = count.saturating_add(1);
                *count
            }
            None => {
                self.entries.push((name.to_string(), 1));
                1
            }
        };
        self.save()?;
        Ok(count)
    }

    /// Entries by descending count; equal counts keep insertion order.
    pub fn sorted_by_score(&self) -> Vec<(String, u32)> {
        let mut sorted = self.entries.clone();
        // `sort_by` is stable.
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }

    /// Render the ledger in its on-disk format.
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(|(name, count)| format!("{name} : {count}\n"))
            .collect()
    }

    /// Rewrite the backing file. No-op for in-memory ledgers.
    pub fn save(&self) -> Result<(), LedgerError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        fs::write(path, self.to_text()).map_err(|source| LedgerError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), entries = self.entries.len(), "ledger saved");
        Ok(())
    }

    fn upsert(&mut self, name: String, count: u32) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = count,
            None => self.entries.push((name, count)),
        }
    }
}

impl WinRecorder for ScoreLedger {
    fn report_win(&mut self, name: &str, turns_taken: u32) -> Result<(), LedgerError> {
        let count = self.record_win(name)?;
        info!(name, turns_taken, wins = count, "win recorded");
        Ok(())
    }
}

/// `name : count`, split on the last colon so names may contain one.
fn parse_record(line: &str) -> Option<(String, u32)> {
    let (name, count) = line.rsplit_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let count: u32 = count.trim().parse().ok()?;
    if count == 0 {
        return None;
    }
    Some((name.to_string(), count))
}
