//! `tasksheet_io_xlsx` v1:
//! Rust-side XLSX kernel for task sheets.
//!
//! Modules:
//! - `conf`   : constants and default presets
//! - `spec`   : formats/layout/report models and errors
//! - `util`   : pure helper functions
//! - `writer` : single-sheet writer kernel
pub mod conf;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    C_FILE_XLSX_DEFAULT, C_SHEET_NAME_DEFAULT, N_LEN_EXCEL_SHEET_NAME_MAX, N_NROWS_EXCEL_MAX,
    TUP_EXCEL_ILLEGAL, derive_default_task_formats, derive_default_task_layout,
};
pub use spec::{
    SpecCellFormat, SpecTaskColumn, SpecTaskSheetFormats, SpecTaskSheetLayout,
    SpecTaskSheetOptions, SpecXlsxReport, XlsxWriteError,
};
pub use util::{derive_rust_xlsx_format, sanitize_sheet_name};
pub use writer::{TaskSheetWriter, write_task_records};
