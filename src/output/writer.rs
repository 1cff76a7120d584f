//! Canonical persistence of the daily record.
//!
//! One contract: pretty-printed JSON to a date-keyed archive file plus a
//! `latest.json` for public consumption. Re-running a date overwrites both
//! deterministically; concurrent runs for the same date are unsupported
//! (last writer wins).

use crate::models::signal::DailySignal;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

const ARCHIVE_PREFIX: &str = "daily_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenPaths {
    pub archive: PathBuf,
    pub latest: PathBuf,
}

pub struct SignalWriter {
    output_dir: PathBuf,
    public_dir: PathBuf,
}

impl SignalWriter {
    pub fn new(output_dir: PathBuf, public_dir: PathBuf) -> Self {
        Self {
            output_dir,
            public_dir,
        }
    }

    /// Persist the record to the archive and the public latest file.
    pub fn write(
        &self,
        signal: &DailySignal,
    ) -> Result<WrittenPaths, Box<dyn std::error::Error + Send + Sync>> {
        fs::create_dir_all(&self.output_dir)?;
        fs::create_dir_all(&self.public_dir)?;

        let json = serde_json::to_string_pretty(signal)?;

        let archive = self
            .output_dir
            .join(format!("{}{}.json", ARCHIVE_PREFIX, signal.date));
        let latest = self.public_dir.join("latest.json");

        fs::write(&archive, &json)?;
        fs::write(&latest, &json)?;

        debug!(archive = %archive.display(), latest = %latest.display(), "daily record written");
        Ok(WrittenPaths { archive, latest })
    }

    /// Load the most recent `count` archived records, oldest first.
    ///
    /// Archive names embed ISO dates, so name order is date order.
    /// Unreadable or unparseable files are skipped, not fatal.
    pub fn load_recent(
        &self,
        count: usize,
    ) -> Result<Vec<DailySignal>, Box<dyn std::error::Error + Send + Sync>> {
        let mut paths: Vec<PathBuf> = fs::read_dir(&self.output_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .map(|n| n.starts_with(ARCHIVE_PREFIX) && n.ends_with(".json"))
                    .unwrap_or(false)
            })
            .collect();
        paths.sort();

        let recent = paths.split_off(paths.len().saturating_sub(count));
        let mut signals = Vec::with_capacity(recent.len());
        for path in recent {
            match fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()))
            {
                Ok(signal) => signals.push(signal),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable daily record");
                }
            }
        }
        Ok(signals)
    }
}
