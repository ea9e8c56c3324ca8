pub mod cli;
pub mod detect;
pub mod error;
pub mod patterns;
pub mod report;
pub mod scan;
pub mod types;

pub use report::{generate_report, Report, ReportFormat};
pub use scan::{scan_directory, scan_file, scan_path, SUPPORTED_EXTENSIONS};
pub use types::{Category, Finding, Severity};
