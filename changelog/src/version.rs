use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::markup::parse_fragment;
use crate::sections::{Section, descendant_elements, find_sections};
use crate::types::{Categories, Change, Version};
use crate::utils::{
    BRACKETED_TITLE_PATTERN, BRACKETED_VERSION_PATTERN, VERSION_DATE_SEPARATOR_PATTERN,
    VERSION_NUMBER_PATTERN,
};

/// Date layouts tried in order: the shape a candidate must have, how to read it,
/// and whether the year has only two digits.
static DATE_FORMATS: Lazy<Vec<(Regex, &'static str, bool)>> = Lazy::new(|| {
    [
        (r"^\d{4}-\d{2}-\d{2}$", "%Y-%m-%d", false),
        (r"^\d{2}-\d{2}-\d{4}$", "%m-%d-%Y", false),
        (r"^\d{2}-\d{2}-\d{2}$", "%m-%d-%y", true),
        (r"^\d{2}/\d{2}/\d{4}$", "%m/%d/%Y", false),
        (r"^\d{2}/\d{2}/\d{2}$", "%m/%d/%y", true),
    ]
    .into_iter()
    .map(|(shape, format, two_digit_year)| {
        (
            Regex::new(shape).expect("Failed to compile date shape regex"),
            format,
            two_digit_year,
        )
    })
    .collect()
});

const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

/// Two-digit years above this belong to the 1900s, the rest to the 2000s.
const TWO_DIGIT_YEAR_CUTOFF: i32 = 60;

/// Builds a [`Version`] from a `##` section.
pub fn extract_version(section: &Section, category_order: Option<&[String]>) -> Version {
    let title = strip_title_brackets(&section.heading);
    let (version, date) = split_version_and_date(&title);

    let mut changes = collect_changes(&section.body);
    if let Some(order) = category_order {
        sort_changes(&mut changes, order);
    }
    let categories: Categories = changes.iter().collect();

    tracing::trace!(
        title = %title,
        version = ?version,
        date = ?date,
        changes = changes.len(),
        "Extracted version section"
    );

    Version {
        title,
        version,
        date,
        body: section.body.clone(),
        changes,
        categories,
    }
}

/// `[X]` becomes `X`; anything else, including `[X] - date`, is kept as is.
pub fn strip_title_brackets(heading: &str) -> String {
    BRACKETED_TITLE_PATTERN
        .captures(heading)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| heading.to_string(), |m| m.as_str().to_string())
}

/// Splits a title into its version number and date, either of which may be absent.
pub fn split_version_and_date(title: &str) -> (Option<String>, Option<String>) {
    let (candidate, date) = match VERSION_DATE_SEPARATOR_PATTERN.captures(title) {
        Some(caps) => (
            caps.get(1).map_or(title, |m| m.as_str()),
            caps.get(2).map(|m| resolve_date(m.as_str())),
        ),
        None => (title, None),
    };

    (resolve_version(candidate), date)
}

/// Renders a recognized date as e.g. `October 28, 2021`; anything else is returned verbatim.
pub fn resolve_date(candidate: &str) -> String {
    DATE_FORMATS
        .iter()
        .filter(|(shape, _, _)| shape.is_match(candidate))
        .find_map(|(_, format, two_digit_year)| {
            let date = NaiveDate::parse_from_str(candidate, format).ok()?;
            if *two_digit_year {
                expand_two_digit_year(date)
            } else {
                Some(date)
            }
        })
        .map_or_else(
            || candidate.to_string(),
            |date| date.format(LONG_DATE_FORMAT).to_string(),
        )
}

/// Re-centers a `%y` date on the cutoff: `65` is 1965, `60` is 2060.
fn expand_two_digit_year(date: NaiveDate) -> Option<NaiveDate> {
    let short = date.year().rem_euclid(100);
    let century = if short > TWO_DIGIT_YEAR_CUTOFF { 1900 } else { 2000 };
    date.with_year(century + short)
}

/// Returns the candidate, less one layer of brackets, if it looks like a version number.
pub fn resolve_version(candidate: &str) -> Option<String> {
    let candidate = BRACKETED_VERSION_PATTERN
        .captures(candidate)
        .and_then(|caps| caps.get(1))
        .map_or(candidate, |m| m.as_str());

    VERSION_NUMBER_PATTERN
        .is_match(candidate)
        .then(|| candidate.to_string())
}

/// One change per direct item of the first list under each `###` heading.
pub fn collect_changes(body: &str) -> Vec<Change> {
    let document = parse_fragment(body);

    find_sections(3, document.root_element())
        .into_iter()
        .flat_map(|section| {
            let fragment = parse_fragment(&section.body);
            let items: Vec<String> = descendant_elements(fragment.root_element())
                .find(|element| element.value().name() == "ul")
                .map(|list| {
                    list.child_elements()
                        .filter(|item| item.value().name() == "li")
                        .map(|item| item.inner_html())
                        .collect()
                })
                .unwrap_or_default();

            if items.is_empty() {
                tracing::trace!(category = %section.heading, "Category section has no list items");
            }

            let category = section.heading;
            items.into_iter().map(move |body| Change {
                category: category.clone(),
                body,
            })
        })
        .collect()
}

/// Stable sort by position in `order`; categories missing from it go last.
pub fn sort_changes(changes: &mut [Change], order: &[String]) {
    changes.sort_by_key(|change| {
        order
            .iter()
            .position(|category| *category == change.category)
            .unwrap_or(order.len())
    });
}
