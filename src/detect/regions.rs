// src/detect/regions.rs
//! Threaded-region delimiting and shared-access matching, the two halves
//! of the missing-lock detector.

use crate::patterns::{MUTATION_SHAPE, REGION_OPENERS};

/// Delimits contiguous regions associated with thread/concurrency
/// constructs.
///
/// A region opens at the first line containing a region-opener token
/// (case-sensitive plain substring) when not already inside one, and
/// closes at the first whitespace-only line, which is excluded from the
/// region. Returns non-overlapping `(start, end)` pairs, 1-based, end
/// exclusive.
///
/// A region still open at end-of-file is not emitted, so trailing
/// threaded code escapes missing-lock analysis entirely.
#[must_use]
pub fn threaded_regions(lines: &[&str]) -> Vec<(usize, usize)> {
    let mut regions = Vec::new();
    let mut in_region = false;
    let mut start = 0;

    for (i, line) in lines.iter().enumerate() {
        let number = i + 1;
        if REGION_OPENERS.iter().any(|tok| line.contains(tok)) {
            if !in_region {
                in_region = true;
                start = number;
            }
        } else if in_region && line.trim().is_empty() {
            regions.push((start, number));
            in_region = false;
        }
    }

    regions
}

/// Returns the 1-based line numbers in `start..end` whose text matches
/// the generic mutation/assignment shape.
#[must_use]
pub fn shared_accesses(lines: &[&str], start: usize, end: usize) -> Vec<usize> {
    (start..end)
        .filter(|&number| MUTATION_SHAPE.is_match(lines[number - 1]))
        .collect()
}
