use pulldown_cmark::{Options, Parser, html};
use scraper::Html;

/// Renders Markdown to HTML with smart punctuation.
///
/// Headings are rendered without `id` attributes.
pub fn markdown_to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_SMART_PUNCTUATION);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options);
    let mut output = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

/// Parses an HTML fragment into a navigable tree.
pub fn parse_fragment(html: &str) -> Html {
    Html::parse_fragment(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_have_no_ids() {
        let html = markdown_to_html("# Change Log\n\n## [1.0.0] - 2021-10-28\n");
        assert!(html.contains("<h1>Change Log</h1>"));
        assert!(html.contains("<h2>[1.0.0] - 2021-10-28</h2>"));
    }

    #[test]
    fn test_smart_punctuation() {
        let html = markdown_to_html("## 1.0 -- \"Quoted\"\n");
        assert!(html.contains('–'));
        assert!(html.contains('“'));
        assert!(html.contains('”'));
    }

    #[test]
    fn test_inline_markup_is_kept() {
        let html = markdown_to_html("- see [docs](https://example.com) *now*\n");
        assert!(html.contains(r#"<a href="https://example.com">docs</a>"#));
        assert!(html.contains("<em>now</em>"));
    }
}
