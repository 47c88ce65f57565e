use crate::listing::JobRecord;
use crate::report::Reporter;
use crate::Result;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Result of handing the collected records to the sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Written { rows: usize, path: PathBuf },
    Skipped,
}

/// Writes job records as a comma-separated table with a header row
pub struct CsvSink;

impl CsvSink {
    /// Write all records to `path`, replacing any existing file
    ///
    /// Nothing is written when `records` is empty.
    pub fn save(records: &[JobRecord], path: &Path, reporter: &dyn Reporter) -> Result<SaveOutcome> {
        if records.is_empty() {
            reporter.nothing_to_save();
            return Ok(SaveOutcome::Skipped);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tracing::debug!("Ensuring output directory exists: {}", parent.display());
            fs::create_dir_all(parent)?;
        }

        tracing::debug!("Writing CSV file to: {}", path.display());

        let file = File::create(path)?;
        Self::write_to(records, BufWriter::new(file))?;

        reporter.saved(records.len(), path);

        Ok(SaveOutcome::Written {
            rows: records.len(),
            path: path.to_path_buf(),
        })
    }

    /// Render the records as CSV text
    pub fn to_string(records: &[JobRecord]) -> Result<String> {
        let mut buf = Vec::new();
        Self::write_to(records, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn write_to<W: Write>(records: &[JobRecord], writer: W) -> Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        for record in records {
            csv.serialize(record)?;
        }
        csv.flush()?;
        Ok(())
    }
}
