//! Commit record types
//!
//! These are the already-parsed commit records the renderer consumes. Field
//! names serialize in camelCase (`type`, `isBreaking`, ...) so commit dumps
//! produced by other conventional-commit tooling load without translation.
//! Unknown fields are ignored.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A parsed conventional commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    /// Commit type (feat, fix, etc.), looked up in the configured type table
    #[serde(rename = "type")]
    pub commit_type: String,
    /// Scope (optional, in parentheses)
    #[serde(default)]
    pub scope: Option<String>,
    /// Commit description
    pub description: String,
    /// Whether this is a breaking change
    #[serde(default)]
    pub is_breaking: bool,
    /// Pull requests, issues and hashes associated with the commit
    #[serde(default)]
    pub references: Vec<Reference>,
    /// Commit authors and co-authors
    #[serde(default)]
    pub authors: Vec<Author>,
}

impl Commit {
    /// Create a new commit with a type and description
    pub fn new(commit_type: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            commit_type: commit_type.into(),
            scope: None,
            description: description.into(),
            is_breaking: false,
            references: Vec::new(),
            authors: Vec::new(),
        }
    }

    /// Set the scope
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Mark the commit as a breaking change
    pub fn breaking(mut self) -> Self {
        self.is_breaking = true;
        self
    }

    /// Add a reference
    pub fn with_reference(mut self, reference: Reference) -> Self {
        self.references.push(reference);
        self
    }

    /// Add an author by name
    pub fn with_author(mut self, name: impl Into<String>) -> Self {
        self.authors.push(Author::new(name));
        self
    }

    /// Scope with surrounding whitespace removed, if anything is left
    pub fn trimmed_scope(&self) -> Option<&str> {
        self.scope
            .as_deref()
            .map(str::trim)
            .filter(|scope| !scope.is_empty())
    }
}

/// Kind of identifier a reference points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceType {
    /// Pull request number
    PullRequest,
    /// Issue number
    Issue,
    /// Commit hash
    Hash,
}

impl ReferenceType {
    /// Serialized name of the reference type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PullRequest => "pull-request",
            Self::Issue => "issue",
            Self::Hash => "hash",
        }
    }
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pull request, issue or hash attached to a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Reference kind
    #[serde(rename = "type")]
    pub ref_type: ReferenceType,
    /// Identifier, e.g. `#42` or `a1b2c3d`
    pub value: String,
}

impl Reference {
    /// Create a new reference
    pub fn new(ref_type: ReferenceType, value: impl Into<String>) -> Self {
        Self {
            ref_type,
            value: value.into(),
        }
    }

    /// Pull request reference
    pub fn pull_request(value: impl Into<String>) -> Self {
        Self::new(ReferenceType::PullRequest, value)
    }

    /// Issue reference
    pub fn issue(value: impl Into<String>) -> Self {
        Self::new(ReferenceType::Issue, value)
    }

    /// Commit hash reference
    pub fn hash(value: impl Into<String>) -> Self {
        Self::new(ReferenceType::Hash, value)
    }

    /// Value with a single leading `#` removed
    pub fn id(&self) -> &str {
        self.value.strip_prefix('#').unwrap_or(&self.value)
    }
}

/// A commit author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name, free text
    #[serde(default)]
    pub name: String,
    /// Email address, carried along but never rendered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Author {
    /// Create an author without an email
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
        }
    }
}
