//! Commit line and reference formatting

use changelogen_core::{ChangelogConfig, Commit, Reference, ReferenceType};

/// Base URL for repository links
pub const GITHUB_URL: &str = "https://github.com";

/// Marker placed before the description of a breaking commit
pub const BREAKING_MARKER: &str = "\u{26a0}\u{fe0f}  ";

/// Upper-case the first character, leaving the rest untouched
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format the version heading text: a compare link when a repository is
/// configured, otherwise the plain range.
pub fn format_title(config: &ChangelogConfig) -> String {
    match config.github_repo() {
        Some(repo) => format!(
            "[{to}]({url}/{repo}/compare/{from}...{to})",
            to = config.to,
            from = config.from,
            url = GITHUB_URL,
            repo = repo,
        ),
        None => format!("{} ({}..{})", config.to, config.from, config.to),
    }
}

/// Format a single commit as a list item
pub fn format_commit(commit: &Commit, config: &ChangelogConfig) -> String {
    let mut line = String::from("  - ");

    if let Some(scope) = commit.trimmed_scope() {
        line.push_str(&format!("**{}:** ", scope));
    }

    if commit.is_breaking {
        line.push_str(BREAKING_MARKER);
    }

    line.push_str(&upper_first(&commit.description));
    line.push_str(&format_references(&commit.references, config));
    line
}

/// Format the parenthesised reference suffix of a commit line.
///
/// Pull requests and issues take precedence, pull requests first. Without
/// either, only the first reference of any kind is shown.
pub fn format_references(references: &[Reference], config: &ChangelogConfig) -> String {
    let pull_requests = references
        .iter()
        .filter(|r| r.ref_type == ReferenceType::PullRequest);
    let issues = references
        .iter()
        .filter(|r| r.ref_type == ReferenceType::Issue);

    let linked: Vec<String> = pull_requests
        .chain(issues)
        .map(|r| format_reference(r, config))
        .collect();

    if !linked.is_empty() {
        return format!(" ({})", linked.join(", "));
    }

    match references.first() {
        Some(first) => format!(" ({})", format_reference(first, config)),
        None => String::new(),
    }
}

/// Format one reference, as a link when a repository is configured
pub fn format_reference(reference: &Reference, config: &ChangelogConfig) -> String {
    match config.github_repo() {
        Some(repo) => format!(
            "[{}]({}/{}/{}/{})",
            reference.value,
            GITHUB_URL,
            repo,
            link_segment(reference.ref_type),
            reference.id()
        ),
        None => reference.value.clone(),
    }
}

// "ssue" matches the issue links existing changelogs already contain.
fn link_segment(ref_type: ReferenceType) -> &'static str {
    match ref_type {
        ReferenceType::PullRequest => "pull",
        ReferenceType::Hash => "commit",
        ReferenceType::Issue => "ssue",
    }
}
