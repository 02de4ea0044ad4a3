//! `tasksheet_io_md` v1:
//! Rust-side markdown task-list extractor.
//!
//! Modules:
//! - `conf`    : template labels and default paths
//! - `spec`    : task record model, field enum and errors
//! - `report`  : extraction report model
//! - `extract` : template matching over document text
pub mod conf;
pub mod extract;
pub mod report;
pub mod spec;

pub use conf::{C_FILE_MD_DEFAULT, C_HEADING_TASK};
pub use extract::{extract_task_records, read_task_records};
pub use report::ReportExtract;
pub use spec::{EnumTaskField, ExtractError, SpecTaskRecord};
