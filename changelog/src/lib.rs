//! Parses "keep a changelog" style Markdown into versions and categorized changes.
//!
//! ```
//! use changelog::{ParseOptions, parse_changelog};
//!
//! let text = "# Change Log\n\n## [1.1.8] - 2021-10-28\n\n### Fixed\n\n- A bug\n";
//! let changelog = parse_changelog(ParseOptions::from_text(text)).unwrap();
//!
//! assert_eq!(changelog.title, "Change Log");
//! assert_eq!(changelog.versions[0].version.as_deref(), Some("1.1.8"));
//! assert_eq!(changelog.versions[0].date.as_deref(), Some("October 28, 2021"));
//! ```

pub mod config;
pub mod error;
pub mod markup;
pub mod parser;
pub mod preprocess;
pub mod sections;
pub mod types;
pub mod utils;
pub mod version;

use std::borrow::Cow;
use std::fs;
use std::str::FromStr;

pub use config::{DEFAULT_CATEGORY_ORDER, DEFAULT_TITLE, ParseOptions};
pub use error::ChangelogError;
pub use parser::Parser;
pub use types::{Categories, Change, ChangeLog, Result, Version};

/// Parses a change log from a path or from a full set of options.
///
/// A bare `&str`, `String` or path is read from disk with default options.
/// When both a path and text are given, the path is used.
///
/// # Errors
///
/// Returns `ChangelogError::InvalidInput` when neither text nor a path is given,
/// and `ChangelogError::ReadError` when the file cannot be read.
pub fn parse_changelog(options: impl Into<ParseOptions>) -> Result<ChangeLog> {
    let options = options.into();
    let text = read_source(&options)?;
    Ok(Parser::new(&options).parse(&text))
}

#[tracing::instrument(skip_all, fields(path = ?options.path))]
fn read_source(options: &ParseOptions) -> Result<Cow<'_, str>> {
    match (&options.path, &options.text) {
        (Some(path), _) => {
            let text = fs::read_to_string(path)?;
            tracing::debug!(bytes = text.len(), "Read changelog file");
            Ok(Cow::Owned(text))
        }
        (None, Some(text)) => Ok(Cow::Borrowed(text.as_str())),
        (None, None) => Err(ChangelogError::InvalidInput),
    }
}

impl FromStr for ChangeLog {
    type Err = ChangelogError;

    fn from_str(text: &str) -> Result<Self> {
        Ok(Parser::new(&ParseOptions::default()).parse(text))
    }
}
