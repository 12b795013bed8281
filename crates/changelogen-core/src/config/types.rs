//! Configuration types

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Changelog configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Commit types to render, in section order
    pub types: TypeTable,

    /// Version label the range starts at
    pub from: String,

    /// Version label the range ends at
    pub to: String,

    /// GitHub repository (`owner/repo`) used for links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            types: TypeTable::conventional(),
            from: String::new(),
            to: String::new(),
            github: None,
        }
    }
}

impl ChangelogConfig {
    /// Create a config with the given type table and no range
    pub fn with_types(types: TypeTable) -> Self {
        Self {
            types,
            from: String::new(),
            to: String::new(),
            github: None,
        }
    }

    /// Set the version range
    pub fn with_range(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from = from.into();
        self.to = to.into();
        self
    }

    /// Set the GitHub repository
    pub fn with_github(mut self, repo: impl Into<String>) -> Self {
        self.github = Some(repo.into());
        self
    }

    /// GitHub repository, if one is configured and non-empty
    pub fn github_repo(&self) -> Option<&str> {
        self.github.as_deref().filter(|repo| !repo.is_empty())
    }
}

/// Configuration for a single commit type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeConfig {
    /// Section heading
    pub title: String,
}

impl TypeConfig {
    /// Create a type config with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Ordered mapping from commit type to its section configuration.
///
/// Insertion order is the section order. Deserialization keeps the order the
/// keys appear in the source document; a repeated key replaces the earlier
/// entry in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeTable {
    entries: Vec<(String, TypeConfig)>,
}

impl TypeTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Conventional commit types with their default titles
    pub fn conventional() -> Self {
        [
            ("feat", "🚀 Enhancements"),
            ("perf", "🔥 Performance"),
            ("fix", "🩹 Fixes"),
            ("refactor", "💅 Refactors"),
            ("docs", "📖 Documentation"),
            ("build", "📦 Build"),
            ("types", "🌊 Types"),
            ("chore", "🏡 Chore"),
            ("examples", "🏀 Examples"),
            ("test", "✅ Tests"),
            ("style", "🎨 Styles"),
            ("ci", "🤖 CI"),
        ]
        .into_iter()
        .map(|(key, title)| (key, TypeConfig::new(title)))
        .collect()
    }

    /// Insert or replace a type, keeping the position of an existing key
    pub fn insert(&mut self, key: impl Into<String>, config: TypeConfig) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = config,
            None => self.entries.push((key, config)),
        }
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, title: impl Into<String>) -> Self {
        self.insert(key, TypeConfig::new(title));
        self
    }

    /// Look up a type
    pub fn get(&self, key: &str) -> Option<&TypeConfig> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, config)| config)
    }

    /// Check whether a type is configured
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate types in section order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeConfig)> {
        self.entries.iter().map(|(k, config)| (k.as_str(), config))
    }

    /// Type keys in section order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of configured types
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no types are configured
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, TypeConfig)> for TypeTable {
    fn from_iter<I: IntoIterator<Item = (K, TypeConfig)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, config) in iter {
            table.insert(key, config);
        }
        table
    }
}

impl Serialize for TypeTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, config) in &self.entries {
            map.serialize_entry(key, config)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TypeTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TypeTableVisitor;

        impl<'de> Visitor<'de> for TypeTableVisitor {
            type Value = TypeTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of commit types to { title }")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<TypeTable, A::Error> {
                let mut table = TypeTable::new();
                while let Some((key, config)) = access.next_entry::<String, TypeConfig>()? {
                    table.insert(key, config);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TypeTableVisitor)
    }
}
