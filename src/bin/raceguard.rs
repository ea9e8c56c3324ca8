// src/bin/raceguard.rs
use std::path::Path;
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use raceguard_core::cli::Cli;
use raceguard_core::report::Report;
use raceguard_core::scan;
use raceguard_core::types::Finding;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let findings = collect_findings(&cli)?;
    let total = findings.len();

    let report = Report::from_findings(findings);
    report.save(&cli.output, cli.format)?;

    println!("Report saved to: {}", cli.output.display());
    println!("Found {total} potential race conditions");

    Ok(())
}

fn collect_findings(cli: &Cli) -> Result<Vec<Finding>> {
    if cli.verbose {
        eprintln!("Scanning: {}", cli.path.display());
    }

    if cli.path.is_dir() && cli.verbose {
        return Ok(scan::scan_directory_with_progress(
            &cli.path,
            &|path: &Path| {
                eprintln!("Scanning {}", path.display());
            },
        ));
    }

    Ok(scan::scan_path(&cli.path)?)
}
