use scraper::ElementRef;

/// A heading and the markup that follows it up to the next heading of the same level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

/// Text content of an element, with entities decoded.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

fn is_heading(element: &ElementRef<'_>, tag: &str) -> bool {
    element.value().name() == tag
}

/// All elements under `root` (excluding `root` itself) in document order.
pub fn descendant_elements<'a>(root: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    root.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// Finds every `h<level>` under `root` and pairs it with the outer HTML of
/// its following sibling elements, stopping at the next `h<level>` sibling.
pub fn find_sections(level: u8, root: ElementRef<'_>) -> Vec<Section> {
    let tag = format!("h{level}");

    descendant_elements(root)
        .filter(|element| is_heading(element, &tag))
        .map(|heading| {
            let body = heading
                .next_siblings()
                .filter_map(ElementRef::wrap)
                .take_while(|sibling| !is_heading(sibling, &tag))
                .map(|sibling| sibling.html())
                .collect::<Vec<_>>()
                .join("\n");

            Section {
                heading: element_text(heading),
                body,
            }
        })
        .collect()
}

/// Text of the first `h<level>` under `root`, if any.
pub fn first_heading_text(level: u8, root: ElementRef<'_>) -> Option<String> {
    let tag = format!("h{level}");
    descendant_elements(root)
        .find(|element| is_heading(element, &tag))
        .map(element_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parse_fragment;

    const HTML: &str = "<h1>Log</h1>\
        <h2>1.1.0</h2><h3>Fixed</h3><ul><li>one</li></ul>\
        <h2>1.0.0</h2><p>intro</p><h3>New</h3><ul><li>two</li></ul>";

    #[test]
    fn test_splits_on_same_level_headings() {
        let doc = parse_fragment(HTML);
        let sections = find_sections(2, doc.root_element());

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading, "1.1.0");
        assert_eq!(sections[0].body, "<h3>Fixed</h3>\n<ul><li>one</li></ul>");
        assert_eq!(sections[1].heading, "1.0.0");
        assert_eq!(
            sections[1].body,
            "<p>intro</p>\n<h3>New</h3>\n<ul><li>two</li></ul>"
        );
    }

    #[test]
    fn test_lower_level_headings_do_not_end_a_section() {
        let doc = parse_fragment(HTML);
        let sections = find_sections(3, doc.root_element());

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading, "Fixed");
        assert_eq!(sections[0].body, "<ul><li>one</li></ul>\n<h2>1.0.0</h2>\n<p>intro</p>");
    }

    #[test]
    fn test_no_headings_means_no_sections() {
        let doc = parse_fragment("<p>Just text</p><ul><li>item</li></ul>");
        assert!(find_sections(2, doc.root_element()).is_empty());
    }

    #[test]
    fn test_heading_text_decodes_entities() {
        let doc = parse_fragment("<h1>Tom &amp; Jerry <code>v2</code></h1>");
        assert_eq!(
            first_heading_text(1, doc.root_element()).as_deref(),
            Some("Tom & Jerry v2")
        );
        assert_eq!(first_heading_text(2, doc.root_element()), None);
    }
}
