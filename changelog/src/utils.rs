use once_cell::sync::Lazy;
use regex::Regex;

/// A line that is only a category keyword followed by a colon, e.g. `Fixed:`.
pub static COLON_SECTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?imR)^(Added|New|Changed|Improved|Fixed|Removed|Security):$")
        .expect("Failed to compile colon section regex")
});

/// A heading that is a single bracketed token, e.g. `[1.0.0]` or `[Unreleased]`.
pub static BRACKETED_TITLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[([^\[\]]*)\]$").expect("Failed to compile bracketed title regex")
});

/// Splits a heading into version and date on ` - `, ` -- ` or an en/em dash.
pub static VERSION_DATE_SEPARATOR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(.+?)(?:\s+-+\s+|\s*[–—]\s*)(.+)")
        .expect("Failed to compile version/date separator regex")
});

/// A version candidate with any wrapping brackets.
pub static BRACKETED_VERSION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(.+)\]$").expect("Failed to compile bracketed version regex"));

pub static VERSION_NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+(\.\d+){0,2}\S*$").expect("Failed to compile version number regex")
});
