//! Task record model, field enumeration and extractor errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////
// #region FieldEnumeration

/// The six task fields, in template order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EnumTaskField {
    /// Grouping label.
    Category,
    /// Subsystem or area name.
    Module,
    /// Free-text description of the work items.
    Tasks,
    /// Classification tag.
    Kind,
    /// Assignee or role.
    Who,
    /// Effort estimate, free text.
    Estimate,
}

impl EnumTaskField {
    /// All fields in template (and column) order.
    pub const ALL: [EnumTaskField; 6] = [
        EnumTaskField::Category,
        EnumTaskField::Module,
        EnumTaskField::Tasks,
        EnumTaskField::Kind,
        EnumTaskField::Who,
        EnumTaskField::Estimate,
    ];

    /// Literal label used both in the markdown template and as column header.
    pub fn label(self) -> &'static str {
        match self {
            EnumTaskField::Category => "Catégorie",
            EnumTaskField::Module => "Module",
            EnumTaskField::Tasks => "Tâches",
            EnumTaskField::Kind => "Type",
            EnumTaskField::Who => "Qui",
            EnumTaskField::Estimate => "Estimation",
        }
    }

    /// Zero-based position of the field.
    pub fn index(self) -> usize {
        self as usize
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Record

/// One extracted task entry.
///
/// Fields are stored trimmed and are never mutated after extraction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecTaskRecord {
    /// Grouping label.
    pub category: String,
    /// Subsystem or area name.
    pub module: String,
    /// Free-text work description.
    pub tasks: String,
    /// Classification tag (`Type` in the document).
    pub kind: String,
    /// Assignee or role.
    pub who: String,
    /// Effort estimate.
    pub estimate: String,
}

impl SpecTaskRecord {
    /// Build a record from six values in template order.
    pub fn from_values(values: [&str; 6]) -> Self {
        let [category, module, tasks, kind, who, estimate] = values;
        Self {
            category: category.trim().to_string(),
            module: module.trim().to_string(),
            tasks: tasks.trim().to_string(),
            kind: kind.trim().to_string(),
            who: who.trim().to_string(),
            estimate: estimate.trim().to_string(),
        }
    }

    /// Value of one field.
    pub fn get(&self, field: EnumTaskField) -> &str {
        match field {
            EnumTaskField::Category => &self.category,
            EnumTaskField::Module => &self.module,
            EnumTaskField::Tasks => &self.tasks,
            EnumTaskField::Kind => &self.kind,
            EnumTaskField::Who => &self.who,
            EnumTaskField::Estimate => &self.estimate,
        }
    }

    /// All six values in field order.
    pub fn values(&self) -> [&str; 6] {
        EnumTaskField::ALL.map(|field| self.get(field))
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Extractor failures. Matching itself never fails; only reading can.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input document could not be read (permissions, invalid UTF-8, ...).
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Input document path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
