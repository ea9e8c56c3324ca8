// src/detect/thread_race.rs
//! Threading Race: thread/concurrency constructs with no
//! synchronization vocabulary nearby.

use super::context::has_sync_nearby;
use crate::patterns::THREAD_RACE;
use crate::types::{Category, Finding};

pub(super) fn detect(file_path: &str, lines: &[&str], out: &mut Vec<Finding>) {
    for (i, line) in lines.iter().enumerate() {
        let number = i + 1;
        for pattern in THREAD_RACE.iter() {
            if pattern.is_match(line) && !has_sync_nearby(lines, number) {
                out.push(Finding::new(
                    file_path,
                    number,
                    Category::ThreadingRace,
                    "Threading operation without proper synchronization".into(),
                    line,
                ));
            }
        }
    }
}
