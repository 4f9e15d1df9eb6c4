// src/document/html.rs
// =============================================================================
// This module extracts asset references from HTML embedded in the README.
//
// READMEs often use raw HTML for images (to control width or alignment), and
// occasionally pull in stylesheets or scripts. We parse the whole document
// with `scraper` (html5ever underneath); markdown text simply becomes text
// nodes, and the tags we care about come out as elements.
//
// Tags and attributes we look at:
//   <img src>   <link href>   <script src>
// =============================================================================

use scraper::{Html, Selector};

use super::is_local_reference;

const SOURCE_SELECTOR: &str = "img[src], link[href], script[src]";

// Extracts every repository-local source attribute value, in document order
//
// Parameters:
//   text: the canonical README text
//
// Returns: attribute values as written (no normalization)
//
// Example:
//   text = r#"<img src="docs/shot.png"> <img src="https://x/y.png">"#
//   result = ["docs/shot.png"]
pub fn extract_markup_refs(text: &str) -> Vec<String> {
    let mut refs = Vec::new();

    let document = Html::parse_document(text);
    let selector = match Selector::parse(SOURCE_SELECTOR) {
        Ok(selector) => selector,
        Err(_) => return refs,
    };

    for element in document.select(&selector) {
        // An element may carry both; src comes first
        for attr in ["src", "href"] {
            if let Some(value) = element.value().attr(attr) {
                if is_local_reference(value) {
                    refs.push(value.to_string());
                }
            }
        }
    }

    refs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_local_img() {
        let html = r#"<p align="center"><img src="docs/shot.png" width="400"></p>"#;
        assert_eq!(extract_markup_refs(html), vec!["docs/shot.png"]);
    }

    #[test]
    fn test_skip_remote_sources() {
        let html = r#"
            <img src="https://img.shields.io/badge/x-y-green.svg">
            <script src="http://cdn.example.com/app.js"></script>
        "#;
        assert!(extract_markup_refs(html).is_empty());
    }

    #[test]
    fn test_link_and_script_in_document_order() {
        let html = r#"
            <link rel="stylesheet" href="css/style.css">
            <img src="./a.gif">
            <script src="js/app.js"></script>
        "#;
        assert_eq!(
            extract_markup_refs(html),
            vec!["css/style.css", "./a.gif", "js/app.js"]
        );
    }

    #[test]
    fn test_anchors_are_not_assets() {
        let html = r#"<a href="docs/guide.md">Guide</a>"#;
        assert!(extract_markup_refs(html).is_empty());
    }

    #[test]
    fn test_html_inside_markdown() {
        let markdown = "# Title\n\nIntro paragraph.\n\n<img src=\"img/arch.svg\" alt=\"arch\">\n\n- item\n";
        assert_eq!(extract_markup_refs(markdown), vec!["img/arch.svg"]);
    }
}
