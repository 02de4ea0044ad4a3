//! Extraction report model.

use std::collections::BTreeMap;
use std::fmt;

use crate::spec::SpecTaskRecord;

/// Records and counters for one extraction run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportExtract {
    /// Extracted records, in document order.
    pub records: Vec<SpecTaskRecord>,
    /// Number of task heading lines seen in the document.
    pub cnt_headings: u64,
    /// Number of blocks that matched the full six-field template.
    pub cnt_matched: u64,
}

impl ReportExtract {
    /// Headings that did not yield a record (malformed or partial blocks).
    pub fn cnt_skipped(&self) -> u64 {
        self.cnt_headings.saturating_sub(self.cnt_matched)
    }

    /// Whether no record was extracted.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_headings".to_string(), self.cnt_headings);
        dict_counts.insert("cnt_matched".to_string(), self.cnt_matched);
        dict_counts.insert("cnt_skipped".to_string(), self.cnt_skipped());
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        let dict_counts = self.to_dict();
        format!(
            "{prefix} headings={} matched={} skipped={}",
            dict_counts["cnt_headings"], dict_counts["cnt_matched"], dict_counts["cnt_skipped"]
        )
    }
}

impl fmt::Display for ReportExtract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[EXTRACT]"))
    }
}
