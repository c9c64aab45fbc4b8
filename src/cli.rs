use clap::{Parser, ValueEnum};

use std::path::PathBuf;

/// Command-line arguments for the report generator.
#[derive(Debug, Parser)]
#[command(version, about = "Generates product rating reports from CSV data files.")]
pub struct Cli {
    /// Paths of the CSV data files to read.
    #[arg(long, required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Which report to generate.
    #[arg(long, value_enum)]
    pub report: ReportType,
}

/// The set of supported report types.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ReportType {
    /// Average rating per brand, best first.
    AverageRating,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_files_and_report_type() {
        let cli = Cli::try_parse_from([
            "ratings",
            "--files",
            "a.csv",
            "b.csv",
            "--report",
            "average-rating",
        ])
        .unwrap();
        assert_eq!(
            cli.files,
            vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")]
        );
        assert_eq!(cli.report, ReportType::AverageRating);
    }

    #[test]
    fn cli_rejects_unsupported_report_type() {
        let result = Cli::try_parse_from([
            "ratings",
            "--files",
            "a.csv",
            "--report",
            "wrong-report",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_requires_files_flag() {
        let result = Cli::try_parse_from(["ratings", "--report", "average-rating"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_requires_report_flag() {
        let result = Cli::try_parse_from(["ratings", "--files", "a.csv"]);
        assert!(result.is_err());
    }
}
