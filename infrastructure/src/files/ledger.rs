//! Ledger file adapter
//!
//! Stores past winners as `<identifier> <tier>` lines, appended one per
//! draw. A ledger file that does not exist yet means no one has led.

use rossini_application::{HistoryLedger, LedgerError};
use rossini_domain::{History, HistoryRecord, parse_history};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Append-only ledger file on the local file system.
///
/// No file lock is taken; two processes appending to the same ledger at
/// once may interleave their records.
#[derive(Debug, Clone)]
pub struct FileHistoryLedger {
    path: PathBuf,
}

impl FileHistoryLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> LedgerError {
        LedgerError::Io {
            location: self.location(),
            source,
        }
    }
}

impl HistoryLedger for FileHistoryLedger {
    fn records(&self) -> Result<History, LedgerError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No ledger at {}, starting fresh", self.path.display());
                return Ok(History::default());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        parse_history(&text).map_err(|source| LedgerError::Format {
            location: self.location(),
            source,
        })
    }

    fn append(&self, record: &HistoryRecord) -> Result<(), LedgerError> {
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        // Keep records on separate lines if the last one was written by hand
        // without a trailing newline.
        let needs_newline = ends_without_newline(&mut file).map_err(|e| self.io_error(e))?;
        let line = if needs_newline {
            format!("\n{}\n", record.to_line())
        } else {
            format!("{}\n", record.to_line())
        };

        file.write_all(line.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| self.io_error(e))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn ends_without_newline(file: &mut fs::File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
