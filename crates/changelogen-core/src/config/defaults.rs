//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "changelogen.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "changelogen.yaml";

/// Default configuration file name (JSON)
pub const DEFAULT_CONFIG_JSON: &str = "changelogen.json";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".changelogen.toml",
        ".changelogen.yaml",
        DEFAULT_CONFIG_JSON,
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# changelogen configuration

# Version range shown in the title. Usually overridden with --from/--to.
from = ""
to = ""

# GitHub repository used for compare, pull request, issue and commit links.
# github = "owner/repo"

# Commit types to render. Sections appear in the order listed here; commits
# with any other type are left out of the sections.
[types.feat]
title = "🚀 Enhancements"

[types.perf]
title = "🔥 Performance"

[types.fix]
title = "🩹 Fixes"

[types.refactor]
title = "💅 Refactors"

[types.docs]
title = "📖 Documentation"

[types.build]
title = "📦 Build"

[types.types]
title = "🌊 Types"

[types.chore]
title = "🏡 Chore"

[types.examples]
title = "🏀 Examples"

[types.test]
title = "✅ Tests"

[types.style]
title = "🎨 Styles"

[types.ci]
title = "🤖 CI"
"#;
