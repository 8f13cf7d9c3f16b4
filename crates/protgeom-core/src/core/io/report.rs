use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// One row of the statistics export: a single analyzed file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsRecord {
    pub path: String,
    pub atoms: usize,
    pub cg_x: f64,
    pub cg_y: f64,
    pub cg_z: f64,
    pub rg: f64,
    pub dmax: f64,
}

/// Writes [`StatisticsRecord`] rows as CSV with a header line.
pub struct CsvReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvReportWriter<File> {
    /// Creates (or truncates) the report file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, ReportError> {
        let file = File::create(path)?;
        Ok(Self::from_writer(file))
    }
}

impl<W: Write> CsvReportWriter<W> {
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    pub fn write_record(&mut self, record: &StatisticsRecord) -> Result<(), ReportError> {
        self.writer.serialize(record)?;
        Ok(())
    }

    /// Flushes buffered rows to the underlying writer.
    pub fn finish(mut self) -> Result<(), ReportError> {
        self.writer.flush()?;
        Ok(())
    }
}
