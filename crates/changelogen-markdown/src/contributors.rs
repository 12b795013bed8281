//! Contributor list building

use std::collections::BTreeSet;

use changelogen_core::Commit;

use crate::line::upper_first;

/// Capitalize each space-separated part of a name
pub fn format_name(name: &str) -> String {
    name.split(' ')
        .map(|part| upper_first(part.trim()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collect unique contributor names from every commit, sorted.
///
/// Covers all commits, including those whose type has no section. Names are
/// compared after [`format_name`], so `bob` and `Bob` are one contributor.
pub fn collect_contributors(commits: &[Commit]) -> Vec<String> {
    commits
        .iter()
        .flat_map(|commit| commit.authors.iter())
        .map(|author| format_name(&author.name))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
