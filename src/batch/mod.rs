//! Batch driver and report output

pub mod record;
pub mod runner;

pub use record::{ReportWriter, format_record};
pub use runner::{BatchRunner, BatchSummary};
