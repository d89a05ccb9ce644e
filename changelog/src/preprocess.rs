use std::borrow::Cow;

use crate::utils::COLON_SECTION_PATTERN;

/// Rewrites category lines written as `Fixed:` into `### Fixed` headings.
///
/// Only lines that consist of nothing but one of the known category keywords
/// and a colon are touched; the keyword keeps its spelling.
pub fn normalize_colon_sections(text: &str) -> Cow<'_, str> {
    COLON_SECTION_PATTERN.replace_all(text, "### ${1}")
}
