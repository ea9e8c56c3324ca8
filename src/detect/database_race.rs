// src/detect/database_race.rs
//! Database Race: mutating SQL statements with no transaction
//! vocabulary nearby.

use super::context::has_transaction_nearby;
use crate::patterns::DATABASE_RACE;
use crate::types::{Category, Finding};

pub(super) fn detect(file_path: &str, lines: &[&str], out: &mut Vec<Finding>) {
    for (i, line) in lines.iter().enumerate() {
        let number = i + 1;
        for pattern in DATABASE_RACE.iter() {
            if pattern.is_match(line) && !has_transaction_nearby(lines, number) {
                out.push(Finding::new(
                    file_path,
                    number,
                    Category::DatabaseRace,
                    "Database operation without proper transaction handling".into(),
                    line,
                ));
            }
        }
    }
}
