//! CSV report backend.
//!
//! Creates two files in the configured output directory:
//! - `completions.csv`
//! - `point_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{CompletionRow, PointSummaryRow, ReportResult};

/// Writes run output to two CSV files.
pub struct CsvWriter {
    completions: Writer<File>,
    summaries:   Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let mut completions = Writer::from_path(dir.join("completions.csv"))?;
        completions.write_record([
            "point",
            "desk",
            "ticket",
            "identity",
            "wait_minutes",
            "service_minutes",
            "completed_at",
        ])?;

        let mut summaries = Writer::from_path(dir.join("point_summaries.csv"))?;
        summaries.write_record([
            "point",
            "clock",
            "waiting",
            "serving",
            "served",
            "avg_wait",
            "avg_service",
        ])?;

        Ok(Self {
            completions,
            summaries,
            finished: false,
        })
    }
}

impl ReportWriter for CsvWriter {
    fn write_completion(&mut self, row: &CompletionRow) -> ReportResult<()> {
        self.completions.write_record(&[
            row.point.to_string(),
            row.desk.to_string(),
            row.ticket.clone(),
            row.identity.clone(),
            row.wait_minutes.to_string(),
            row.service_minutes.to_string(),
            row.completed_at.to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &PointSummaryRow) -> ReportResult<()> {
        self.summaries.write_record(&[
            row.point.to_string(),
            row.clock.to_string(),
            row.waiting.to_string(),
            row.serving.to_string(),
            row.served.to_string(),
            row.avg_wait.to_string(),
            row.avg_service.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.completions.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
