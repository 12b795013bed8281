//! Changelog types

use serde::{Deserialize, Serialize};

/// A rendered section of the changelog, one per configured commit type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section title
    pub title: String,
    /// Formatted commit lines, newest first
    pub lines: Vec<String>,
}

impl Section {
    /// Create a new section
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// Add a formatted commit line
    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Check if section is empty
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A changelog entry for a version range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    /// Target version label
    pub version: String,
    /// Version heading text, possibly a compare link
    pub title: String,
    /// Sections in configured type order
    pub sections: Vec<Section>,
    /// Breaking change lines (highlighted separately)
    pub breaking_changes: Vec<String>,
    /// Normalized, sorted, unique contributor names
    pub contributors: Vec<String>,
}

impl ChangelogEntry {
    /// Create a new changelog entry
    pub fn new(version: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            title: title.into(),
            sections: Vec::new(),
            breaking_changes: Vec::new(),
            contributors: Vec::new(),
        }
    }

    /// Add a section
    pub fn add_section(&mut self, section: Section) {
        if !section.is_empty() {
            self.sections.push(section);
        }
    }

    /// Add a breaking change line
    pub fn add_breaking_change(&mut self, line: impl Into<String>) {
        self.breaking_changes.push(line.into());
    }
}
