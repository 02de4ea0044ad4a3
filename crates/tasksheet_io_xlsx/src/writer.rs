//! XLSX writer kernel that renders task records into a single styled sheet.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tasksheet_io_md::SpecTaskRecord;
use tracing::{debug, info};

use crate::conf::N_NROWS_EXCEL_MAX;
use crate::spec::{SpecTaskColumn, SpecTaskSheetOptions, SpecXlsxReport, XlsxWriteError};
use crate::util::{
    cast_col_num, cast_row_num, derive_rust_xlsx_format, sanitize_sheet_name, validate_layout,
};

/// Stateful single-sheet workbook writer.
pub struct TaskSheetWriter {
    path_file_out: PathBuf,
    workbook: Workbook,
    options: SpecTaskSheetOptions,
    report: Option<SpecXlsxReport>,
    if_closed: bool,
}

impl TaskSheetWriter {
    /// Create writer bound to output path and layout/format options.
    ///
    /// The workbook is buffered in memory until [`Self::close`] is called.
    pub fn new(path_file_out: PathBuf, options: SpecTaskSheetOptions) -> Self {
        Self {
            path_file_out,
            workbook: Workbook::new(),
            options,
            report: None,
            if_closed: false,
        }
    }

    /// Return output file path as string.
    pub fn file_out(&self) -> String {
        self.path_file_out.to_string_lossy().to_string()
    }

    /// Report of the written sheet, once [`Self::write_records`] succeeded.
    pub fn report(&self) -> Option<SpecXlsxReport> {
        self.report.clone()
    }

    /// Flush workbook to disk, overwriting any existing file. Idempotent.
    pub fn close(&mut self) -> Result<(), XlsxWriteError> {
        if self.if_closed {
            return Ok(());
        }
        self.workbook.save(&self.path_file_out)?;
        self.if_closed = true;
        info!(path = %self.path_file_out.display(), "workbook saved");
        Ok(())
    }

    /// Render the header row and one row per record into the task sheet.
    pub fn write_records(&mut self, records: &[SpecTaskRecord]) -> Result<(), XlsxWriteError> {
        if self.if_closed {
            return Err(XlsxWriteError::Closed);
        }
        if self.report.is_some() {
            return Err(XlsxWriteError::SheetAlreadyWritten);
        }

        let layout = &self.options.layout;
        validate_layout(layout)?;

        let n_rows = records.len() + 1;
        if n_rows > N_NROWS_EXCEL_MAX {
            return Err(XlsxWriteError::RowLimit {
                n_rows,
                n_rows_max: N_NROWS_EXCEL_MAX,
            });
        }

        let mut report = SpecXlsxReport::default();
        let sheet_name = sanitize_sheet_name(&layout.sheet_name, "_");
        if sheet_name != layout.sheet_name {
            report.warn(format!(
                "Sheet name {:?} sanitized to {sheet_name:?}.",
                layout.sheet_name
            ));
        }

        let fmt_header = derive_rust_xlsx_format(&self.options.formats.header);
        let fmt_body = derive_rust_xlsx_format(&self.options.formats.body);

        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name(&sheet_name)?;

        write_header(worksheet, &layout.columns, layout.height_header, &fmt_header)?;
        for (n_idx_record, record) in records.iter().enumerate() {
            write_record_row(worksheet, n_idx_record + 1, record, &layout.columns, &fmt_body)?;
        }
        for (n_idx_col, col) in layout.columns.iter().enumerate() {
            worksheet.set_column_width(cast_col_num(n_idx_col)?, col.width)?;
        }

        debug!(
            sheet = %sheet_name,
            n_rows,
            n_cols = layout.columns.len(),
            "task sheet rendered"
        );

        report.sheet_name = sheet_name;
        report.n_rows = n_rows;
        report.n_cols = layout.columns.len();
        self.report = Some(report);
        Ok(())
    }
}

/// Write `records` to a fresh workbook at `path_file_out` with default layout.
pub fn write_task_records(
    path_file_out: impl AsRef<Path>,
    records: &[SpecTaskRecord],
) -> Result<SpecXlsxReport, XlsxWriteError> {
    let mut writer = TaskSheetWriter::new(
        path_file_out.as_ref().to_path_buf(),
        SpecTaskSheetOptions::default(),
    );
    writer.write_records(records)?;
    writer.close()?;
    Ok(writer.report().unwrap_or_default())
}

fn write_header(
    worksheet: &mut Worksheet,
    columns: &[SpecTaskColumn],
    height_header: f64,
    fmt_header: &Format,
) -> Result<(), XlsxWriteError> {
    for (n_idx_col, col) in columns.iter().enumerate() {
        worksheet.write_string_with_format(
            0,
            cast_col_num(n_idx_col)?,
            col.field.label(),
            fmt_header,
        )?;
    }
    worksheet.set_row_height(0, height_header)?;
    Ok(())
}

fn write_record_row(
    worksheet: &mut Worksheet,
    row_idx: usize,
    record: &SpecTaskRecord,
    columns: &[SpecTaskColumn],
    fmt_body: &Format,
) -> Result<(), XlsxWriteError> {
    let n_row = cast_row_num(row_idx)?;
    for (n_idx_col, col) in columns.iter().enumerate() {
        let n_col = cast_col_num(n_idx_col)?;
        let value = record.get(col.field);
        if value.is_empty() {
            worksheet.write_blank(n_row, n_col, fmt_body)?;
        } else {
            worksheet.write_string_with_format(n_row, n_col, value, fmt_body)?;
        }
    }
    Ok(())
}
