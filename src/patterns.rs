// src/patterns.rs
//! The pattern registry: per-category hazard patterns and the keyword
//! vocabularies used by the mitigation heuristics.
//!
//! Everything here is lexical. Patterns are matched line by line,
//! case-insensitively, with no notion of scope or control flow. That
//! trade (recall over precision) is the point of the tool, so these
//! lists stay deliberately short and hand-curated.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .unwrap_or_else(|_| panic!("Invalid Regex: {p}"))
        })
        .collect()
}

/// File operation call shapes (open/write/read).
pub static FILE_RACE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"open\s*\([^)]*\)",
        r"write\s*\([^)]*\)",
        r"read\s*\([^)]*\)",
        r"f\.write\s*\([^)]*\)",
        r"f\.read\s*\([^)]*\)",
    ])
});

/// Compound-assignment shapes. The first capture group is the mutated
/// variable's name, used verbatim in the finding description.
pub static VARIABLE_RACE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(\w+)\s*\+=\s*\w+",
        r"(\w+)\s*-=\s*\w+",
        r"(\w+)\s*\*=\s*\w+",
        r"(\w+)\s*/=\s*\w+",
    ])
});

/// The self-referential assignment form `x = x <op> y`.
///
/// The `regex` crate has no backreferences, so both identifiers are
/// captured and the caller checks them for (case-insensitive) equality.
pub static SELF_ASSIGN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"(\w+)\s*=\s*(\w+)\s*[+\-*/]\s*\w+")
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// SQL statement shapes that mutate or lock rows.
pub static DATABASE_RACE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"INSERT\s+INTO",
        r"UPDATE\s+\w+",
        r"DELETE\s+FROM",
        r"SELECT\s+.*\s+FOR\s+UPDATE",
        r"BEGIN\s+TRANSACTION",
    ])
});

/// Thread/concurrency construct tokens.
pub static THREAD_RACE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"threading\.Thread",
        r"concurrent\.futures",
        r"asyncio\.",
        r"\.start\(\)",
        r"\.join\(\)",
    ])
});

/// Synchronization-primitive tokens. This set is the mitigation
/// vocabulary consulted by other detectors, not a hazard detector itself.
pub static LOCK_PRIMITIVES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"threading\.Lock",
        r"threading\.RLock",
        r"threading\.Semaphore",
        r"\.acquire\(\)",
        r"\.release\(\)",
    ])
});

/// Generic mutation/assignment shape used by the shared-access finder.
/// Looser than the variable-race patterns: the two identifiers need not
/// relate.
pub static MUTATION_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"\w+\s*[+\-*/]?=\s*\w+")
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Lowercase substrings that suggest a lock is held near a file operation.
/// `with` stands in for scoped-resource acquisition.
pub const LOCK_KEYWORDS: &[&str] = &["lock", "acquire", "release", "with"];
pub const LOCK_RADIUS: usize = 10;

/// Lowercase substrings that suggest transactional handling near a
/// database operation.
pub const TRANSACTION_KEYWORDS: &[&str] = &["transaction", "commit", "rollback", "begin", "end"];
pub const TRANSACTION_RADIUS: usize = 20;

/// Lowercase substrings that suggest synchronization near a threading
/// construct.
pub const SYNC_KEYWORDS: &[&str] = &["lock", "semaphore", "barrier", "event", "condition"];
pub const SYNC_RADIUS: usize = 20;

/// Case-sensitive tokens that mark a file as containing threaded code at
/// all. Checked file-wide, not windowed.
pub const THREAD_CONTEXT_TOKENS: &[&str] = &["threading", "Thread", "concurrent", "asyncio"];

/// Case-sensitive tokens that open a threaded region.
pub const REGION_OPENERS: &[&str] = &["threading", "Thread", "concurrent"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_patterns_match_call_shapes() {
        assert!(FILE_RACE[0].is_match("fh = open('data.txt', 'a')"));
        assert!(FILE_RACE[1].is_match("f.write(payload)"));
        assert!(!FILE_RACE[0].is_match("openness matters"));
    }

    #[test]
    fn database_patterns_are_case_insensitive() {
        assert!(DATABASE_RACE[0].is_match("cur.execute(\"insert into users ...\")"));
        assert!(DATABASE_RACE[3].is_match("SELECT id FROM t FOR UPDATE"));
    }

    #[test]
    fn self_assign_captures_both_identifiers() {
        let caps = SELF_ASSIGN.captures("total = total + delta").unwrap();
        assert_eq!(&caps[1], "total");
        assert_eq!(&caps[2], "total");
    }

    #[test]
    fn lock_primitive_patterns_match_synchronization_calls() {
        assert!(LOCK_PRIMITIVES.iter().any(|p| p.is_match("mu.acquire()")));
        assert!(LOCK_PRIMITIVES.iter().any(|p| p.is_match("sem = threading.Semaphore(2)")));
        assert!(!LOCK_PRIMITIVES.iter().any(|p| p.is_match("release the hounds")));
    }

    #[test]
    fn mutation_shape_accepts_plain_and_compound_assignment() {
        assert!(MUTATION_SHAPE.is_match("count = count"));
        assert!(MUTATION_SHAPE.is_match("count += 1"));
        assert!(!MUTATION_SHAPE.is_match("shared_data.append(item)"));
    }
}
