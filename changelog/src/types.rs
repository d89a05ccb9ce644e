use crate::error::ChangelogError;
use serde::{Serialize, Serializer};

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// A parsed change log: its title and the versions it lists, newest first
/// as they appear in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeLog {
    pub title: String,
    pub versions: Vec<Version>,
}

impl ChangeLog {
    /// Looks up a version by its version number, e.g. `"1.1.8"`.
    #[must_use]
    pub fn find_version(&self, version: &str) -> Option<&Version> {
        self.versions
            .iter()
            .find(|v| v.version.as_deref() == Some(version))
    }

    /// The first version section in the document.
    #[must_use]
    pub fn latest(&self) -> Option<&Version> {
        self.versions.first()
    }
}

/// One `##` section of the change log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Version {
    /// Heading text, with the brackets removed when the heading is just `[X]`.
    pub title: String,
    /// Version number, only when the heading carries something shaped like one.
    pub version: Option<String>,
    /// Release date, rendered as e.g. `October 28, 2021` when recognized,
    /// otherwise the text that followed the separator.
    pub date: Option<String>,
    /// HTML of everything between this heading and the next one.
    pub body: String,
    pub changes: Vec<Change>,
    pub categories: Categories,
}

impl Version {
    #[must_use]
    pub fn is_unreleased(&self) -> bool {
        self.title.eq_ignore_ascii_case("unreleased")
    }
}

/// A single list item under a category heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Change {
    pub category: String,
    /// Inner HTML of the list item; links and emphasis are kept as markup.
    pub body: String,
}

/// Change bodies grouped by category, in the order categories were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categories {
    entries: Vec<(String, Vec<String>)>,
}

impl Categories {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: &str, body: String) {
        match self.entries.iter_mut().find(|(name, _)| name == category) {
            Some((_, bodies)) => bodies.push(body),
            None => self.entries.push((category.to_string(), vec![body])),
        }
    }

    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, bodies)| bodies.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.entries
            .iter()
            .map(|(name, bodies)| (name.as_str(), bodies.as_slice()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<&'a Change> for Categories {
    fn from_iter<I: IntoIterator<Item = &'a Change>>(iter: I) -> Self {
        let mut categories = Self::new();
        for change in iter {
            categories.push(&change.category, change.body.clone());
        }
        categories
    }
}

impl Serialize for Categories {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
