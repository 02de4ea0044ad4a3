//! Template constants for the task-list markdown format.

/// Default input document, resolved relative to the working directory.
pub const C_FILE_MD_DEFAULT: &str = "repartition_taches.md";

/// Heading text that opens one task block (followed by a space and digits).
pub const C_HEADING_TASK: &str = "## Tâche";

/// Separator between a bold field label and its value.
pub const C_LABEL_SEPARATOR: &str = " : ";
