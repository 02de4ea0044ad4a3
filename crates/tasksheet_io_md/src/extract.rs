//! Fixed-template task block matching over a whole document.

use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::conf::{C_HEADING_TASK, C_LABEL_SEPARATOR};
use crate::report::ReportExtract;
use crate::spec::{EnumTaskField, ExtractError, SpecTaskRecord};

static RE_TASK_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&derive_task_block_pattern()).expect("task block pattern must compile")
});

static RE_TASK_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&derive_task_heading_pattern()).expect("task heading pattern must compile")
});

/// Regex source for one heading line: `## Tâche <digits>`.
pub fn derive_task_heading_pattern() -> String {
    format!(r"{} \d+", regex::escape(C_HEADING_TASK))
}

/// Regex source for a heading followed by the six labelled lines in order.
///
/// Each field line captures its value up to (not including) the newline.
pub fn derive_task_block_pattern() -> String {
    let mut c_pattern = derive_task_heading_pattern();
    for field in EnumTaskField::ALL {
        c_pattern.push_str(&format!(
            r"\n\*\*{}\*\*{}([^\n]+)",
            regex::escape(field.label()),
            regex::escape(C_LABEL_SEPARATOR),
        ));
    }
    c_pattern
}

/// Normalize `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Extract every complete task block from `text`, in document order.
///
/// Blocks with a missing field, misordered fields or a non-matching heading
/// are skipped without error.
pub fn extract_task_records(text: &str) -> Vec<SpecTaskRecord> {
    extract_task_report(text).records
}

/// Same as [`extract_task_records`] but also counts headings seen.
pub fn extract_task_report(text: &str) -> ReportExtract {
    let text = normalize_line_endings(text);

    let records: Vec<SpecTaskRecord> = RE_TASK_BLOCK
        .captures_iter(&text)
        .map(|caps| {
            let l_values = EnumTaskField::ALL.map(|field| {
                caps.get(field.index() + 1)
                    .map_or("", |val| val.as_str())
            });
            SpecTaskRecord::from_values(l_values)
        })
        .collect();

    let report = ReportExtract {
        cnt_headings: RE_TASK_HEADING.find_iter(&text).count() as u64,
        cnt_matched: records.len() as u64,
        records,
    };

    if report.cnt_skipped() > 0 {
        debug!(
            cnt_skipped = report.cnt_skipped(),
            "task headings without a complete six-field block were skipped"
        );
    }
    debug!("{report}");
    report
}

/// Read the whole document at `path` and extract its task blocks.
///
/// File existence is the caller's concern; a missing file surfaces as
/// [`ExtractError::Read`].
pub fn read_task_records(path: impl AsRef<Path>) -> Result<ReportExtract, ExtractError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), n_bytes = text.len(), "read task document");
    Ok(extract_task_report(&text))
}
