//! Command-line arguments. Every flag is optional; a bare invocation uses the
//! default file names in the working directory.

use std::path::PathBuf;

use clap::Parser;
use tasksheet_io_md::C_FILE_MD_DEFAULT;
use tasksheet_io_xlsx::C_FILE_XLSX_DEFAULT;

#[derive(Debug, Parser)]
#[command(
    name = "tasksheet",
    version,
    about = "Convert a markdown task list into a formatted XLSX sheet"
)]
pub struct Cli {
    /// Markdown task list to read.
    #[arg(short, long, value_name = "PATH", default_value = C_FILE_MD_DEFAULT)]
    pub input: PathBuf,

    /// XLSX workbook to write (overwritten if present).
    #[arg(short, long, value_name = "PATH", default_value = C_FILE_XLSX_DEFAULT)]
    pub output: PathBuf,

    /// Emit debug logs on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_file_names() {
        let cli = Cli::parse_from(["tasksheet"]);
        assert_eq!(cli.input, PathBuf::from("repartition_taches.md"));
        assert_eq!(cli.output, PathBuf::from("repartition_taches.xlsx"));
        assert!(!cli.verbose);
    }

    #[test]
    fn overrides_are_accepted() {
        let cli = Cli::parse_from(["tasksheet", "-i", "plan.md", "--output", "plan.xlsx", "-v"]);
        assert_eq!(cli.input, PathBuf::from("plan.md"));
        assert_eq!(cli.output, PathBuf::from("plan.xlsx"));
        assert!(cli.verbose);
    }
}
