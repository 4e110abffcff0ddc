//! Report file format and writer
//!
//! One record per task:
//!
//! ```text
//! <index>. <title>
//! Link: <link, sentinel or error>
//!
//! ```

use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::debug;

use crate::catalog::SearchTask;
use crate::error::FetchResult;
use crate::web_search::SearchOutcome;

/// Render one report record, trailing blank line included
///
/// The title is written exactly as given, in whatever script it uses.
#[must_use]
pub fn format_record(task: &SearchTask, outcome: &SearchOutcome) -> String {
    format!("{}. {}\nLink: {}\n\n", task.index(), task.title(), outcome)
}

/// Append-only UTF-8 report writer
///
/// The file is truncated on creation and flushed after every record, so an
/// interrupted run leaves all completed records on disk.
#[derive(Debug)]
pub struct ReportWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    records: usize,
}

impl ReportWriter {
    /// Create or truncate the report at `path`
    pub async fn create(path: &Path) -> FetchResult<Self> {
        let file = File::create(path).await?;
        debug!(path = %path.display(), "Report file opened");
        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
            records: 0,
        })
    }

    pub async fn write_record(
        &mut self,
        task: &SearchTask,
        outcome: &SearchOutcome,
    ) -> FetchResult<()> {
        self.writer
            .write_all(format_record(task, outcome).as_bytes())
            .await?;
        self.writer.flush().await?;
        self.records += 1;
        Ok(())
    }

    #[must_use]
    pub fn records(&self) -> usize {
        self.records
    }

    /// Flush and close the report
    pub async fn finish(mut self) -> FetchResult<()> {
        self.writer.shutdown().await?;
        debug!(path = %self.path.display(), records = self.records, "Report file closed");
        Ok(())
    }
}
