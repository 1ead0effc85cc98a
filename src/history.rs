use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use tracing::warn;

use crate::error::{AppError, AppResult};

/// Append-only log of committed navigations, one `"%Y-%m-%d %H:%M:%S <uri>"`
/// line each. Disabled entirely when no path is configured.
pub struct HistoryLog {
    path: Option<PathBuf>,
}

impl HistoryLog {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn is_enabled(&self) -> bool {
        self.path.is_some()
    }

    /// Records a commit, reporting a write failure once and moving on.
    /// Subsequent commits attempt the append again.
    pub fn record(&self, uri: &str) {
        if let Err(err) = self.record_at(Local::now(), uri) {
            warn!("{err}");
        }
    }

    pub fn record_at(&self, when: DateTime<Local>, uri: &str) -> AppResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| AppError::HistoryWrite {
                path: path.clone(),
                source,
            })?;
        writeln!(file, "{} {uri}", when.format("%Y-%m-%d %H:%M:%S")).map_err(|source| {
            AppError::HistoryWrite {
                path: path.clone(),
                source,
            }
        })
    }
}
