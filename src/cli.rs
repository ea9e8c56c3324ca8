// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

use crate::report::ReportFormat;

#[derive(Parser)]
#[command(name = "raceguard", version, about = "Heuristic race-condition scanner")]
pub struct Cli {
    /// File or directory to scan
    pub path: PathBuf,

    /// Output file path
    #[arg(long, short, default_value = "report.json")]
    pub output: PathBuf,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = ReportFormat::Json)]
    pub format: ReportFormat,

    /// Verbose output
    #[arg(long, short)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_json_report() {
        let cli = Cli::parse_from(["raceguard", "src"]);
        assert_eq!(cli.format, ReportFormat::Json);
        assert_eq!(cli.output, PathBuf::from("report.json"));
        assert!(!cli.verbose);
    }

    #[test]
    fn format_and_output_are_overridable() {
        let cli = Cli::parse_from(["raceguard", "src", "-f", "text", "-o", "out.txt"]);
        assert_eq!(cli.format, ReportFormat::Text);
        assert_eq!(cli.output, PathBuf::from("out.txt"));
    }
}
