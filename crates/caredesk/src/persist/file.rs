//! File-backed text store
//!
//! Each role keeps its records in one text file. Saving rewrites the whole
//! file through a temporary sibling and a rename, so a failed save never
//! leaves a half-written store behind.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{CaredeskError, Result};

use super::lines::{LineCursor, LineRecord};
use super::{Persisted, RestoreReport, RestoreStop};

/// Write every record of `container` in its traversal order.
pub fn write_records<C: Persisted, W: Write>(container: &C, out: &mut W) -> io::Result<()> {
    for record in container.records() {
        record.write_lines(out)?;
    }
    Ok(())
}

/// Clear `container` and refill it from `reader` through its normal insert.
///
/// Stops at end of input, at the first malformed record, or when the
/// container reports it is full. Records read before the stop are kept.
pub fn read_records<C: Persisted>(reader: impl BufRead, container: &mut C) -> RestoreReport {
    container.clear();
    let mut cursor = LineCursor::new(reader);
    let mut restored = 0;

    let stop = loop {
        let Some(first) = cursor.next_line() else {
            break if cursor.failed() {
                RestoreStop::Unreadable
            } else {
                RestoreStop::EndOfInput
            };
        };
        if first.is_empty() {
            continue;
        }

        let start = cursor.line_no();
        let Some(record) = C::Record::read_rest(&first, &mut cursor) else {
            break if cursor.failed() {
                RestoreStop::Unreadable
            } else {
                RestoreStop::Malformed { line: start }
            };
        };

        if container.restore_one(record).is_err() {
            break RestoreStop::CapacityReached;
        }
        restored += 1;
    };

    RestoreReport { restored, stop }
}

/// Text file holding one role's records
#[derive(Debug, Clone)]
pub struct TextStore {
    path: PathBuf,
    label: &'static str,
}

impl TextStore {
    /// `label` names the role in log output
    pub fn new(path: impl Into<PathBuf>, label: &'static str) -> Self {
        Self {
            path: path.into(),
            label,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Overwrite the file with the container's current records.
    ///
    /// The container is never touched; on failure the previous file (if any)
    /// is left in place.
    pub fn save<C: Persisted>(&self, container: &C) -> Result<()> {
        let persist_err = |source: io::Error| CaredeskError::Persist {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(persist_err)?;
            }
        }

        let tmp_path = tmp_write_path(&self.path);
        let write_result = (|| -> io::Result<()> {
            let mut writer = BufWriter::new(File::create(&tmp_path)?);
            write_records(container, &mut writer)?;
            writer.flush()?;
            writer.into_inner().map_err(|e| e.into_error())?.sync_all()
        })();

        if let Err(e) = write_result {
            let _ = fs::remove_file(&tmp_path);
            tracing::error!("Cannot write {} store {}: {}", self.label, self.path.display(), e);
            return Err(persist_err(e));
        }

        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            tracing::error!("Cannot replace {} store {}: {}", self.label, self.path.display(), e);
            return Err(persist_err(e));
        }

        tracing::debug!("Saved {} store to {}", self.label, self.path.display());
        Ok(())
    }

    /// Replace the container's contents with the records in the file.
    ///
    /// Never fails: a missing or unreadable file restores to empty.
    pub fn restore<C: Persisted>(&self, container: &mut C) -> RestoreReport {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                container.clear();
                let stop = if e.kind() == io::ErrorKind::NotFound {
                    tracing::info!(
                        "{} not found. Starting with an empty {} store",
                        self.path.display(),
                        self.label
                    );
                    RestoreStop::Missing
                } else {
                    tracing::warn!(
                        "Cannot open {}: {}. Starting with an empty {} store",
                        self.path.display(),
                        e,
                        self.label
                    );
                    RestoreStop::Unreadable
                };
                return RestoreReport { restored: 0, stop };
            }
        };

        let report = read_records(BufReader::new(file), container);
        match report.stop {
            RestoreStop::EndOfInput => tracing::debug!(
                "Loaded {} store from {} (count={})",
                self.label,
                self.path.display(),
                report.restored
            ),
            RestoreStop::Malformed { line } => tracing::warn!(
                "Malformed record at {}:{}; kept the first {} {} records",
                self.path.display(),
                line,
                report.restored,
                self.label
            ),
            RestoreStop::CapacityReached => tracing::warn!(
                "{} store is full after {} records; ignored the rest of {}",
                self.label,
                report.restored,
                self.path.display()
            ),
            RestoreStop::Unreadable => tracing::warn!(
                "Read of {} failed; kept the first {} {} records",
                self.path.display(),
                report.restored,
                self.label
            ),
            RestoreStop::Missing => {}
        }
        report
    }
}

fn tmp_write_path(path: &Path) -> PathBuf {
    let mut tmp: OsString = path.as_os_str().to_os_string();
    tmp.push(format!(".tmp.{}", std::process::id()));
    PathBuf::from(tmp)
}
