// src/detect/lock_missing.rs
//! Missing Lock: assignment-shaped lines inside a threaded region.
//!
//! No mitigation guard here. A lock elsewhere in the file does not
//! suppress these findings; the region itself is the evidence.

use super::regions::{shared_accesses, threaded_regions};
use crate::types::{Category, Finding};

pub(super) fn detect(file_path: &str, lines: &[&str], out: &mut Vec<Finding>) {
    for (start, end) in threaded_regions(lines) {
        for number in shared_accesses(lines, start, end) {
            out.push(Finding::new(
                file_path,
                number,
                Category::MissingLock,
                "Shared resource accessed without proper locking".into(),
                lines[number - 1],
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::all;
    use crate::types::{Category, Severity};

    fn lock_findings(src: &str) -> Vec<crate::types::Finding> {
        let lines: Vec<&str> = src.split('\n').collect();
        all("t.py", &lines)
            .into_iter()
            .filter(|f| f.category == Category::MissingLock)
            .collect()
    }

    #[test]
    fn mutation_inside_threaded_region_is_flagged() {
        let src = "t = threading.Thread(target=f)\nshared = shared + 1\n\nprint(shared)";
        let found = lock_findings(src);
        // Line 1 matches the mutation shape too (`t = threading`).
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].line_number, 2);
        assert_eq!(found[1].severity, Severity::High);
    }

    #[test]
    fn lock_elsewhere_does_not_suppress() {
        let src = "mu = threading.Lock()\nshared = shared + 1\n\n";
        let found = lock_findings(src);
        assert!(found.iter().any(|f| f.line_number == 2));
    }

    #[test]
    fn mutation_outside_any_region_is_silent() {
        assert!(lock_findings("shared = shared + 1\n\n").is_empty());
    }
}
