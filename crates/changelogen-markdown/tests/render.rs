//! End-to-end rendering tests through the public API.

use changelogen_core::{Author, ChangelogConfig, Commit, Reference, TypeTable};
use changelogen_markdown::contributors::format_name;
use changelogen_markdown::{render, ChangelogGenerator};
use proptest::prelude::*;

// ─── Helpers ─────────────────────────────────────────────────────────────────

const WARNING: &str = "\u{26a0}\u{fe0f}";

fn features_config() -> ChangelogConfig {
    ChangelogConfig::with_types(TypeTable::new().with("feat", "Features"))
        .with_range("v1.0.0", "v1.1.0")
}

fn api_commit() -> Commit {
    Commit::new("feat", "add endpoint")
        .with_scope("api")
        .breaking()
        .with_reference(Reference::issue("#42"))
        .with_author("jane doe")
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn breaking_feature_with_github_links() {
    let config = features_config().with_github("org/repo");
    let output = render(&[api_commit()], &config);

    let line = format!(
        "  - **api:** {}  Add endpoint ([#42](https://github.com/org/repo/ssue/42))",
        WARNING
    );
    let expected = [
        "## [v1.1.0](https://github.com/org/repo/compare/v1.0.0...v1.1.0)".to_string(),
        String::new(),
        String::new(),
        "### Features".to_string(),
        String::new(),
        line.clone(),
        String::new(),
        format!("#### {}  Breaking Changes", WARNING),
        String::new(),
        line,
        String::new(),
        "### \u{2764}\u{fe0f}  Contributors".to_string(),
        String::new(),
        "- Jane Doe".to_string(),
    ]
    .join("\n");

    assert_eq!(output, expected);
}

#[test]
fn breaking_feature_without_github() {
    let output = render(&[api_commit()], &features_config());

    assert!(output.starts_with("## v1.1.0 (v1.0.0..v1.1.0)\n"));
    assert!(output.contains(&format!("  - **api:** {}  Add endpoint (#42)", WARNING)));
    assert!(!output.contains("https://"));
}

#[test]
fn case_variants_of_an_author_collapse() {
    let commits = vec![
        Commit::new("feat", "one").with_author("bob"),
        Commit::new("feat", "two").with_author("Bob"),
    ];
    let output = render(&commits, &features_config());

    assert_eq!(output.matches("- Bob").count(), 1);
    assert!(output.ends_with("\n\n- Bob"));
}

#[test]
fn hash_is_dropped_next_to_pull_request() {
    let commit = Commit::new("feat", "add cache")
        .with_reference(Reference::hash("abc1234"))
        .with_reference(Reference::pull_request("#99"));
    let output = render(&[commit], &features_config());

    assert!(output.contains("  - Add cache (#99)"));
    assert!(!output.contains("abc1234"));
}

#[test]
fn empty_type_table_renders_title_and_contributors_only() {
    let config = ChangelogConfig::with_types(TypeTable::new()).with_range("v1", "v2");
    let commits = vec![api_commit(), Commit::new("fix", "fix bug").breaking()];

    let output = render(&commits, &config);
    assert_eq!(
        output,
        "## v2 (v1..v2)\n\n\n### \u{2764}\u{fe0f}  Contributors\n\n- Jane Doe"
    );
}

#[test]
fn no_commits_renders_title_only() {
    let output = render(&[], &features_config());
    assert_eq!(output, "## v1.1.0 (v1.0.0..v1.1.0)");
}

#[test]
fn empty_author_name_still_listed() {
    let mut commit = Commit::new("feat", "anonymous");
    commit.authors.push(Author::new(""));
    let output = render(&[commit], &features_config());

    // the "- " item loses its trailing space to the final trim
    assert!(output.ends_with("### \u{2764}\u{fe0f}  Contributors\n\n-"));
}

#[test]
fn default_titles_are_rendered() {
    let config = ChangelogConfig::default().with_range("v0.1.0", "v0.2.0");
    let commits = vec![
        Commit::new("fix", "fix crash"),
        Commit::new("feat", "add flag"),
    ];

    let output = render(&commits, &config);
    let enhancements = output.find("### \u{1f680} Enhancements").unwrap();
    let fixes = output.find("### \u{1fa79} Fixes").unwrap();
    assert!(enhancements < fixes);
}

#[test]
fn shortcode_titles_are_converted() {
    let config = ChangelogConfig::with_types(TypeTable::new().with("feat", ":sparkles: Features"))
        .with_range("v1", "v2");
    let output = render(&[Commit::new("feat", "add")], &config);

    assert!(output.contains("### \u{2728} Features"));
}

#[test]
fn generator_is_shareable_across_threads() {
    let generator = std::sync::Arc::new(ChangelogGenerator::new());
    let config = std::sync::Arc::new(features_config());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let generator = generator.clone();
            let config = config.clone();
            std::thread::spawn(move || {
                let commits = vec![Commit::new("feat", format!("change {}", i))];
                generator.render(&commits, &config)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let output = handle.join().unwrap();
        assert!(output.contains(&format!("  - Change {}", i)));
    }
}

// ─── Properties ──────────────────────────────────────────────────────────────

fn commit_strategy() -> impl Strategy<Value = Commit> {
    (
        prop::sample::select(vec!["feat", "fix", "docs", "chore"]),
        "[a-z]{1,8}( [a-z]{1,8}){0,3}",
        any::<bool>(),
        prop::collection::vec("[a-zA-Z]{0,6}( [a-zA-Z]{1,6})?", 0..3),
    )
        .prop_map(|(commit_type, description, breaking, authors)| {
            let mut commit = Commit::new(commit_type, description);
            commit.is_breaking = breaking;
            commit.authors = authors.into_iter().map(Author::new).collect();
            commit
        })
}

fn property_config() -> ChangelogConfig {
    ChangelogConfig::with_types(
        TypeTable::new()
            .with("feat", "Features")
            .with("fix", "Fixes")
            .with("docs", "Docs"),
    )
    .with_range("v1.0.0", "v2.0.0")
}

proptest! {
    #[test]
    fn rendering_is_idempotent(commits in prop::collection::vec(commit_strategy(), 0..20)) {
        let config = property_config();
        prop_assert_eq!(render(&commits, &config), render(&commits, &config));
    }

    #[test]
    fn section_lines_are_reversed_input(
        commits in prop::collection::vec(commit_strategy(), 0..20)
    ) {
        let config = property_config();
        let generator = ChangelogGenerator::new();
        let entry = generator.generate(&commits, &config);

        for section in &entry.sections {
            let key = config
                .types
                .iter()
                .find(|(_, t)| t.title == section.title)
                .map(|(k, _)| k)
                .unwrap();
            let expected: Vec<String> = commits
                .iter()
                .filter(|c| c.commit_type == key)
                .rev()
                .map(|c| changelogen_markdown::line::format_commit(c, &config))
                .collect();
            prop_assert_eq!(&section.lines, &expected);
        }
    }

    #[test]
    fn contributors_are_sorted_unique_and_complete(
        commits in prop::collection::vec(commit_strategy(), 0..20)
    ) {
        let entry = ChangelogGenerator::new().generate(&commits, &property_config());

        let mut expected: Vec<String> = commits
            .iter()
            .flat_map(|c| c.authors.iter().map(|a| format_name(&a.name)))
            .collect();
        expected.sort();
        expected.dedup();

        prop_assert_eq!(entry.contributors, expected);
    }

    #[test]
    fn format_name_capitalizes_every_part(name in "[a-zA-Z]{0,6}( [a-zA-Z]{0,6}){0,3}") {
        let formatted = format_name(&name);
        let input_parts: Vec<&str> = name.split(' ').collect();
        let output_parts: Vec<&str> = formatted.split(' ').collect();

        prop_assert_eq!(output_parts.len(), input_parts.len());
        for (out, input) in output_parts.iter().zip(&input_parts) {
            prop_assert!(out.chars().next().map_or(true, |c| c.is_ascii_uppercase()));
            prop_assert!(out.eq_ignore_ascii_case(input));
            // only the first letter changes
            prop_assert_eq!(out.get(1..).unwrap_or(""), input.get(1..).unwrap_or(""));
        }
        prop_assert_eq!(format_name(&formatted), formatted);
    }
}
