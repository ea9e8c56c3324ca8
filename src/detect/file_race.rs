// src/detect/file_race.rs
//! File Operation Race: open/write/read call shapes with no lock
//! vocabulary nearby.

use super::context::has_lock_nearby;
use crate::patterns::FILE_RACE;
use crate::types::{Category, Finding};

pub(super) fn detect(file_path: &str, lines: &[&str], out: &mut Vec<Finding>) {
    for (i, line) in lines.iter().enumerate() {
        let number = i + 1;
        for pattern in FILE_RACE.iter() {
            if pattern.is_match(line) && !has_lock_nearby(lines, number) {
                out.push(Finding::new(
                    file_path,
                    number,
                    Category::FileRace,
                    "File operation detected without proper synchronization".into(),
                    line,
                ));
            }
        }
    }
}
