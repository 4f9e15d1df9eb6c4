// src/document/mod.rs
// =============================================================================
// The fetched README and everything we can learn from its text.
//
// Submodules:
// - canonical: strips GitHub artifacts (?raw=true, heading anchors)
// - html: finds <img src>, <link href>, <script src>
// - markdown: finds inline [label](path.png) image links
//
// The document is canonicalized once, when it is built. The canonical bytes
// are what gets written to disk; both extraction passes read the same bytes
// decoded as UTF-8 (invalid sequences replaced).
// =============================================================================

mod canonical;
mod html;
mod markdown;

use serde::Serialize;
use url::Url;

pub use canonical::canonicalize;
pub use html::extract_markup_refs;
pub use markdown::extract_inline_images;

/// Where in the document a reference was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RefOrigin {
    /// A src/href attribute on an img, link or script element
    Markup,
    /// Inline `[label](path)` syntax
    InlineLink,
}

/// A repository-relative path found in the document.
///
/// Two references with the same path are still two references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetRef {
    #[serde(rename = "reference")]
    pub path: String,
    pub origin: RefOrigin,
}

/// The canonical README.
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    bytes: Vec<u8>,
    text: String,
}

impl Document {
    /// Builds a document from the bytes served by GitHub, canonicalizing them.
    pub fn from_raw(name: &str, raw: &[u8]) -> Self {
        let bytes = canonicalize(raw);
        let text = String::from_utf8_lossy(&bytes).into_owned();
        Self {
            name: name.to_string(),
            bytes,
            text,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical bytes, exactly what gets written to disk.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Canonical bytes decoded for extraction.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All local references: markup first, then inline links, each in
    /// document order. Nothing is deduplicated.
    pub fn asset_references(&self) -> Vec<AssetRef> {
        let markup = extract_markup_refs(&self.text).into_iter().map(|path| AssetRef {
            path,
            origin: RefOrigin::Markup,
        });
        let inline = extract_inline_images(&self.text)
            .into_iter()
            .map(|path| AssetRef {
                path,
                origin: RefOrigin::InlineLink,
            });
        markup.chain(inline).collect()
    }
}

// Decides whether a reference points into the repository
//
// Local means: not empty, not a #fragment, not protocol-relative (//host/..),
// and not an absolute URL with a scheme (http:, https:, data:, mailto:, ...)
//
// Examples:
//   "https://x/y.png" -> false
//   "img/a.png"       -> true
//   "./c.gif"         -> true
pub fn is_local_reference(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || value.starts_with('#') || value.starts_with("//") {
        return false;
    }
    // Relative paths fail to parse without a base
    Url::parse(value).is_err()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why chain() two iterators?
//    - The order matters: attribute references come before inline ones
//    - chain() yields everything from the first, then the second
//    - collect() turns the combined iterator into a Vec
//
// 2. Why does Url::parse fail on "img/a.png"?
//    - Url::parse only accepts absolute URLs (with a scheme like https:)
//    - A relative path needs a base URL to resolve against
//    - So "does not parse" is a handy test for "relative"
//
// 3. Why keep duplicates?
//    - If README uses the same image twice, it is downloaded twice
//    - The later download simply overwrites the earlier file
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let values = ["https://x/y.png", "img/a.png", "http://z/b.svg", "./c.gif"];
        let local: Vec<&str> = values
            .iter()
            .copied()
            .filter(|v| is_local_reference(v))
            .collect();
        assert_eq!(local, vec!["img/a.png", "./c.gif"]);
    }

    #[test]
    fn test_classification_edge_cases() {
        assert!(!is_local_reference(""));
        assert!(!is_local_reference("#install"));
        assert!(!is_local_reference("//cdn.example.com/a.js"));
        assert!(!is_local_reference("data:image/png;base64,AAAA"));
        assert!(is_local_reference("/docs/logo.png"));
        assert!(is_local_reference("../shared/logo.png"));
    }

    #[test]
    fn test_document_is_canonicalized_once() {
        let doc = Document::from_raw(
            "README.md",
            b"## <a name=\"x\"></a>Title\n![a](img/a.png?raw=true)\n",
        );
        assert_eq!(doc.bytes(), b"## Title\n![a](img/a.png)\n");
        assert_eq!(doc.text(), "## Title\n![a](img/a.png)\n");
        assert_eq!(doc.name(), "README.md");
    }

    #[test]
    fn test_markup_before_inline_and_no_dedup() {
        let raw = b"![inline](img/b.png)\n\n<img src=\"img/a.png?raw=true\">\n\n![again](img/a.png)\n";
        let doc = Document::from_raw("README.md", raw);
        let refs = doc.asset_references();
        let paths: Vec<&str> = refs.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["img/a.png", "img/b.png", "img/a.png"]);
        assert_eq!(refs[0].origin, RefOrigin::Markup);
        assert_eq!(refs[1].origin, RefOrigin::InlineLink);
        assert_eq!(refs[2].origin, RefOrigin::InlineLink);
    }

    #[test]
    fn test_no_references() {
        let doc = Document::from_raw("README.md", b"# Plain\n\nJust text and [a link](https://x.y).\n");
        assert!(doc.asset_references().is_empty());
    }

    #[test]
    fn test_latin1_document_keeps_bytes_and_finds_references() {
        let doc = Document::from_raw("README.md", b"# Caf\xe9\n![a](img/a.png?raw=true)\n");
        assert_eq!(doc.bytes(), b"# Caf\xe9\n![a](img/a.png)\n");
        let paths: Vec<String> = doc.asset_references().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["img/a.png"]);
    }
}
