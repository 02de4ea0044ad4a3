//! Shared XLSX specification models and writer errors.

use std::io;

use rust_xlsxwriter::XlsxError;
use tasksheet_io_md::EnumTaskField;
use thiserror::Error;

use crate::conf::{derive_default_task_formats, derive_default_task_layout};

////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Cell format specification; `None` leaves the workbook default in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    /// Font size in points.
    pub font_size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,

    /// Horizontal alignment.
    pub align: Option<String>,
    /// Vertical alignment.
    pub valign: Option<String>,
    /// Border style for all sides.
    pub border: Option<i64>,
    /// Text wrap.
    pub text_wrap: Option<bool>,

    /// Background fill color.
    pub bg_color: Option<String>,
    /// Font color.
    pub font_color: Option<String>,
}

impl SpecCellFormat {
    /// Return a new format by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecCellFormat) -> SpecCellFormat {
        self.merge(&patch)
    }

    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            align: other.align.clone().or_else(|| self.align.clone()),
            valign: other.valign.clone().or_else(|| self.valign.clone()),
            border: other.border.or(self.border),
            text_wrap: other.text_wrap.or(self.text_wrap),
            bg_color: other.bg_color.clone().or_else(|| self.bg_color.clone()),
            font_color: other.font_color.clone().or_else(|| self.font_color.clone()),
        }
    }
}

/// Header and body cell formats for the task sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecTaskSheetFormats {
    /// Row 1 format.
    pub header: SpecCellFormat,
    /// Format of every record cell.
    pub body: SpecCellFormat,
}

impl Default for SpecTaskSheetFormats {
    fn default() -> Self {
        derive_default_task_formats()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region LayoutSpecification

/// One output column bound to a task field.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecTaskColumn {
    /// Field rendered in this column; its label is the header text.
    pub field: EnumTaskField,
    /// Column width in character units.
    pub width: f64,
}

/// Sheet-level layout: name, header height and column plan.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecTaskSheetLayout {
    /// Requested sheet name (sanitized before use).
    pub sheet_name: String,
    /// Header row height in points.
    pub height_header: f64,
    /// Columns, left to right.
    pub columns: Vec<SpecTaskColumn>,
}

impl Default for SpecTaskSheetLayout {
    fn default() -> Self {
        derive_default_task_layout()
    }
}

/// Writer options: layout plus formats.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecTaskSheetOptions {
    /// Sheet layout.
    pub layout: SpecTaskSheetLayout,
    /// Cell formats.
    pub formats: SpecTaskSheetFormats,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Result of one sheet write.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecXlsxReport {
    /// Actual sheet name in the workbook.
    pub sheet_name: String,
    /// Rows written, header included.
    pub n_rows: usize,
    /// Columns written.
    pub n_cols: usize,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecXlsxReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }

    /// Number of record rows (rows minus the header).
    pub fn n_records(&self) -> usize {
        self.n_rows.saturating_sub(1)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Spreadsheet writer failures.
#[derive(Debug, Error)]
pub enum XlsxWriteError {
    /// The workbook could not be written to its target path.
    #[error("failed to write workbook: {0}")]
    Io(#[source] io::Error),
    /// Any other workbook construction error.
    #[error("xlsx write error: {0}")]
    Xlsx(#[source] XlsxError),
    /// Layout options are unusable.
    #[error("invalid sheet layout: {0}")]
    InvalidLayout(String),
    /// Records do not fit in one worksheet.
    #[error("{n_rows} rows exceed the Excel worksheet limit of {n_rows_max}")]
    RowLimit {
        /// Rows requested, header included.
        n_rows: usize,
        /// Excel row limit.
        n_rows_max: usize,
    },
    /// The task sheet was already written by this writer.
    #[error("task sheet already written; a writer emits exactly one sheet")]
    SheetAlreadyWritten,
    /// The workbook was already flushed.
    #[error("cannot write after close()")]
    Closed,
}

impl From<XlsxError> for XlsxWriteError {
    fn from(err: XlsxError) -> Self {
        match err {
            XlsxError::IoError(err_io) => XlsxWriteError::Io(err_io),
            other => XlsxWriteError::Xlsx(other),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
