use crate::config::ParseOptions;
use crate::markup::{markdown_to_html, parse_fragment};
use crate::preprocess::normalize_colon_sections;
use crate::sections::{find_sections, first_heading_text};
use crate::types::ChangeLog;
use crate::version::extract_version;

/// Turns changelog text into a [`ChangeLog`] according to a set of options.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'a> {
    options: &'a ParseOptions,
}

impl<'a> Parser<'a> {
    pub const fn new(options: &'a ParseOptions) -> Self {
        Self { options }
    }

    pub fn parse(&self, text: &str) -> ChangeLog {
        let text = if self.options.recognize_colon_sections {
            normalize_colon_sections(text)
        } else {
            text.into()
        };

        let html = markdown_to_html(&text);
        let document = parse_fragment(&html);
        let root = document.root_element();

        let title = first_heading_text(1, root)
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| self.options.default_title.clone());

        let order = self.options.category_order.as_deref();
        let mut versions: Vec<_> = find_sections(2, root)
            .iter()
            .map(|section| extract_version(section, order))
            .collect();

        tracing::debug!(title = %title, versions = versions.len(), "Parsed changelog sections");

        if self.options.omit_unreleased_versions {
            versions.retain(|version| !version.is_unreleased());
        }

        ChangeLog { title, versions }
    }
}
