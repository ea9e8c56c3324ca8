// src/detect/mod.rs
//! The five category detectors. Each is a pure function over the line
//! sequence; none shares state with the others.

mod context;
mod database_race;
mod file_race;
mod lock_missing;
mod regions;
mod thread_race;
mod variable_race;

pub use context::{has_lock_nearby, has_sync_nearby, has_transaction_nearby, in_threaded_context, keyword_near};
pub use regions::{shared_accesses, threaded_regions};

use crate::types::Finding;

/// Runs all five detectors over one file's lines in fixed order (file,
/// variable, database, threading, missing-lock) and concatenates their
/// findings. Within a category, findings are in line order.
#[must_use]
pub fn all(file_path: &str, lines: &[&str]) -> Vec<Finding> {
    let mut findings = Vec::new();
    file_race::detect(file_path, lines, &mut findings);
    variable_race::detect(file_path, lines, &mut findings);
    database_race::detect(file_path, lines, &mut findings);
    thread_race::detect(file_path, lines, &mut findings);
    lock_missing::detect(file_path, lines, &mut findings);
    findings
}
