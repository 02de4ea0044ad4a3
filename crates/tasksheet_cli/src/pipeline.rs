//! read -> extract -> write orchestration with the user-facing messages.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tasksheet_io_md::read_task_records;
use tasksheet_io_xlsx::{SpecXlsxReport, write_task_records};
use tracing::debug;

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumRunOutcome {
    /// Input file absent; nothing written.
    MissingInput,
    /// Input had no complete task block; nothing written.
    NoTasks,
    /// Workbook written.
    Written(SpecXlsxReport),
}

/// Convert `path_input` into `path_output`, printing progress to `out`.
///
/// A missing input and an empty extraction are reported and end the run
/// cleanly. Read and write failures are returned as errors.
pub fn run(path_input: &Path, path_output: &Path, out: &mut impl Write) -> Result<EnumRunOutcome> {
    if !path_input.exists() {
        writeln!(
            out,
            "Error: input file '{}' does not exist",
            path_input.display()
        )?;
        return Ok(EnumRunOutcome::MissingInput);
    }

    writeln!(out, "Reading {}...", path_input.display())?;
    let report_extract = read_task_records(path_input)?;
    debug!("{report_extract}");

    if report_extract.is_empty() {
        writeln!(out, "No tasks found in {}", path_input.display())?;
        return Ok(EnumRunOutcome::NoTasks);
    }
    let n_tasks = report_extract.records.len();
    writeln!(out, "Found {n_tasks} tasks")?;

    writeln!(out, "Creating {}...", path_output.display())?;
    let report_xlsx = write_task_records(path_output, &report_extract.records)
        .with_context(|| format!("failed to create {}", path_output.display()))?;
    writeln!(out, "Created {}", path_output.display())?;
    writeln!(out, "Task count: {}", report_xlsx.n_records())?;
    writeln!(out, "Done")?;

    Ok(EnumRunOutcome::Written(report_xlsx))
}
