use std::path::{Path, PathBuf};

/// Category names used to order changes when no other order is configured.
pub const DEFAULT_CATEGORY_ORDER: [&str; 6] =
    ["New", "Changed", "Improved", "Fixed", "Removed", "Security"];

pub const DEFAULT_TITLE: &str = "Release Notes";

/// Where the changelog comes from and how it should be interpreted
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Text of the change log. Ignored when `path` is set.
    pub text: Option<String>,
    /// Path to the change log, read as UTF-8.
    pub path: Option<PathBuf>,
    /// Title used when the document has no `#` heading.
    pub default_title: String,
    /// Treat lines such as `Fixed:` as `### Fixed`.
    pub recognize_colon_sections: bool,
    /// Re-order changes within each version by category. `None` keeps document order.
    pub category_order: Option<Vec<String>>,
    /// Drop versions titled "Unreleased", ignoring case.
    pub omit_unreleased_versions: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            text: None,
            path: None,
            default_title: DEFAULT_TITLE.to_string(),
            recognize_colon_sections: true,
            category_order: Some(DEFAULT_CATEGORY_ORDER.iter().map(|c| c.to_string()).collect()),
            omit_unreleased_versions: true,
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    #[must_use]
    pub const fn with_colon_sections(mut self, enabled: bool) -> Self {
        self.recognize_colon_sections = enabled;
        self
    }

    #[must_use]
    pub fn with_category_order<I, S>(mut self, order: Option<I>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category_order = order.map(|o| o.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub const fn with_omit_unreleased(mut self, omit: bool) -> Self {
        self.omit_unreleased_versions = omit;
        self
    }
}

impl From<&str> for ParseOptions {
    fn from(path: &str) -> Self {
        Self::from_path(path)
    }
}

impl From<String> for ParseOptions {
    fn from(path: String) -> Self {
        Self::from_path(path)
    }
}

impl From<&Path> for ParseOptions {
    fn from(path: &Path) -> Self {
        Self::from_path(path)
    }
}

impl From<PathBuf> for ParseOptions {
    fn from(path: PathBuf) -> Self {
        Self::from_path(path)
    }
}
