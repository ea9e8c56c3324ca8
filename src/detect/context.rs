// src/detect/context.rs
//! Windowed keyword search: the mitigation heuristic shared by the
//! file, database, and threading detectors, plus the file-wide
//! threaded-context check used by the variable detector.
//!
//! Proximity is the only signal. A lock in an unrelated function that
//! happens to fall inside the window suppresses a real hazard, and the
//! reverse produces false positives. Accepted limitation, not a bug.

use crate::patterns::{
    LOCK_KEYWORDS, LOCK_RADIUS, SYNC_KEYWORDS, SYNC_RADIUS, THREAD_CONTEXT_TOKENS,
    TRANSACTION_KEYWORDS, TRANSACTION_RADIUS,
};

/// Returns `true` if any line within `radius` of the 1-based
/// `line_number` contains one of `keywords` as a case-insensitive
/// substring. The window is clipped to file bounds.
#[must_use]
pub fn keyword_near(lines: &[&str], line_number: usize, keywords: &[&str], radius: usize) -> bool {
    let start = line_number.saturating_sub(radius);
    let end = (line_number + radius).min(lines.len());

    lines[start..end].iter().any(|line| {
        let lower = line.to_lowercase();
        keywords.iter().any(|kw| lower.contains(kw))
    })
}

/// Lock-presence check around a file operation.
#[must_use]
pub fn has_lock_nearby(lines: &[&str], line_number: usize) -> bool {
    keyword_near(lines, line_number, LOCK_KEYWORDS, LOCK_RADIUS)
}

/// Transaction-presence check around a database operation.
#[must_use]
pub fn has_transaction_nearby(lines: &[&str], line_number: usize) -> bool {
    keyword_near(lines, line_number, TRANSACTION_KEYWORDS, TRANSACTION_RADIUS)
}

/// Synchronization-presence check around a threading construct.
#[must_use]
pub fn has_sync_nearby(lines: &[&str], line_number: usize) -> bool {
    keyword_near(lines, line_number, SYNC_KEYWORDS, SYNC_RADIUS)
}

/// Returns `true` if the file contains any thread/concurrency token at
/// all. Case-sensitive, file-wide: a compound assignment is only a
/// variable race when the file has threads somewhere.
#[must_use]
pub fn in_threaded_context(lines: &[&str]) -> bool {
    lines
        .iter()
        .any(|line| THREAD_CONTEXT_TOKENS.iter().any(|tok| line.contains(tok)))
}
