// src/detect/variable_race.rs
//! Variable Race: compound assignments and self-referential updates,
//! reported only when the file shows threaded context at all.
//!
//! Polarity is inverted relative to the other detectors: the guard must
//! hold for a finding to be emitted. `counter += 1` in single-threaded
//! code is not a race.

use super::context::in_threaded_context;
use crate::patterns::{SELF_ASSIGN, VARIABLE_RACE};
use crate::types::{Category, Finding};

pub(super) fn detect(file_path: &str, lines: &[&str], out: &mut Vec<Finding>) {
    let threaded = in_threaded_context(lines);

    for (i, line) in lines.iter().enumerate() {
        let number = i + 1;
        for pattern in VARIABLE_RACE.iter() {
            if let Some(caps) = pattern.captures(line) {
                if threaded {
                    out.push(finding(file_path, number, &caps[1], line));
                }
            }
        }
        // `x = x <op> y`: the regex crate has no backreferences, so the
        // two identifiers are captured separately and compared, retrying
        // at later start offsets the way a backreference would re-anchor
        // (`mytotal = total + x` must still flag `total`).
        if let Some(name) = self_assigned_variable(line) {
            if threaded {
                out.push(finding(file_path, number, name, line));
            }
        }
    }
}

/// Returns the variable name of the first `x = x <op> y` match on the
/// line, scanning match start positions until the left- and right-hand
/// identifiers agree (case-insensitively, as a backreference under
/// case-insensitive matching would).
fn self_assigned_variable(line: &str) -> Option<&str> {
    let mut at = 0;
    while let Some(caps) = SELF_ASSIGN.captures_at(line, at) {
        let (Some(whole), Some(lhs), Some(rhs)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            return None;
        };
        if lhs.as_str().eq_ignore_ascii_case(rhs.as_str()) {
            return Some(lhs.as_str());
        }
        at = whole.start() + 1;
    }
    None
}

fn finding(file_path: &str, number: usize, variable: &str, line: &str) -> Finding {
    Finding::new(
        file_path,
        number,
        Category::VariableRace,
        format!("Variable '{variable}' modified without synchronization in threaded context"),
        line,
    )
}
