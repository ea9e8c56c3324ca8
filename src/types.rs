// src/types.rs
use serde::Serialize;
use std::fmt;

/// Severity label attached to every finding. Fixed per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The five hazard classes the scanner reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FileRace,
    VariableRace,
    DatabaseRace,
    ThreadingRace,
    MissingLock,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::FileRace => "File Operation Race",
            Category::VariableRace => "Variable Race",
            Category::DatabaseRace => "Database Race",
            Category::ThreadingRace => "Threading Race",
            Category::MissingLock => "Missing Lock",
        }
    }

    /// Severity is fixed per category; only Variable Race is MEDIUM.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Category::VariableRace => Severity::Medium,
            _ => Severity::High,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One reported potential race-condition hazard at a specific file/line.
///
/// Immutable once created. Line numbers are 1-based and refer to the
/// original line sequence. Findings are never deduplicated: a line that
/// matches several patterns produces several findings.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub file_path: String,
    pub line_number: usize,
    #[serde(rename = "race_type")]
    pub category: Category,
    pub description: String,
    pub severity: Severity,
    #[serde(rename = "code_snippet")]
    pub snippet: String,
    pub recommendations: Vec<&'static str>,
}

impl Finding {
    /// Builds a finding for `category` with its fixed severity and
    /// recommendation set. `snippet` is trimmed here so detectors can pass
    /// the raw line.
    #[must_use]
    pub fn new(
        file_path: &str,
        line_number: usize,
        category: Category,
        description: String,
        snippet: &str,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line_number,
            category,
            description,
            severity: category.severity(),
            snippet: snippet.trim().to_string(),
            recommendations: recommendations_for(category),
        }
    }
}

/// Fixed advisory strings, one set per category.
#[must_use]
pub fn recommendations_for(category: Category) -> Vec<&'static str> {
    match category {
        Category::FileRace => vec![
            "Use file locking mechanisms",
            "Implement proper error handling",
            "Consider using atomic operations",
            "Add retry logic with exponential backoff",
        ],
        Category::VariableRace => vec![
            "Use a mutex to guard variable access",
            "Consider using atomic operations",
            "Use thread-safe data structures",
            "Implement proper synchronization",
        ],
        Category::DatabaseRace => vec![
            "Use database transactions",
            "Implement proper rollback mechanisms",
            "Add retry logic for failed operations",
            "Consider using database-level locking",
        ],
        Category::ThreadingRace => vec![
            "Use a mutex or reentrant lock",
            "Consider using a semaphore",
            "Implement proper thread coordination",
            "Use thread-safe data structures",
        ],
        Category::MissingLock => vec![
            "Add appropriate locks around shared resource access",
            "Use scoped guards for lock management",
            "Consider using atomic operations",
            "Implement proper resource isolation",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_is_fixed_per_category() {
        assert_eq!(Category::FileRace.severity(), Severity::High);
        assert_eq!(Category::VariableRace.severity(), Severity::Medium);
        assert_eq!(Category::DatabaseRace.severity(), Severity::High);
        assert_eq!(Category::ThreadingRace.severity(), Severity::High);
        assert_eq!(Category::MissingLock.severity(), Severity::High);
    }

    #[test]
    fn finding_trims_snippet() {
        let f = Finding::new(
            "a.py",
            3,
            Category::FileRace,
            "File operation detected without proper synchronization".into(),
            "    open('f', 'a')   ",
        );
        assert_eq!(f.snippet, "open('f', 'a')");
        assert_eq!(f.line_number, 3);
        assert_eq!(f.recommendations.len(), 4);
    }

    #[test]
    fn severity_serializes_as_upper_label() {
        let json = serde_json::to_string(&Severity::High).unwrap();
        assert_eq!(json, "\"HIGH\"");
    }
}
