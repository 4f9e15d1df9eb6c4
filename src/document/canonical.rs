// src/document/canonical.rs
// =============================================================================
// Canonicalization: removing GitHub rendering artifacts from the README so it
// renders correctly anywhere.
//
// Two artifacts are handled:
// 1. "?raw=true" appended to blob links, e.g. images/logo.png?raw=true
//    GitHub needs it to serve bytes from a blob URL; a local copy does not.
// 2. Anchor wrappers injected after level-2 heading markers:
//       ## <a name="install"></a>Install   ->   ## Install
//
// Both operate on the raw bytes, so a README in any encoding is written back
// byte for byte apart from the removed artifacts. The HTML tree is parsed
// later from the canonical bytes, so attribute values come out already
// stripped.
// =============================================================================

use std::sync::LazyLock;

use regex::bytes::Regex;

/// Marker GitHub appends to blob URLs to serve raw bytes.
pub const RAW_MARKER: &str = "?raw=true";

static RAW_MARKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&regex::escape(RAW_MARKER)).expect("valid regex"));

// (?-u): `.` matches any byte except '\n', so non-UTF-8 titles still match
// and the wrapper is only removed within one line
static HEADING_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)## <a .*></a>").expect("valid regex"));

/// Removes every occurrence of [`RAW_MARKER`].
///
/// Removal repeats until none is left: deleting one occurrence can splice two
/// fragments into a new one (`?raw?raw=true=true`), and the result must be
/// stable under a second application.
pub fn strip_raw_marker(raw: &[u8]) -> Vec<u8> {
    let mut out = RAW_MARKER_PATTERN.replace_all(raw, &b""[..]).into_owned();
    while RAW_MARKER_PATTERN.is_match(&out) {
        out = RAW_MARKER_PATTERN.replace_all(&out, &b""[..]).into_owned();
    }
    out
}

/// Collapses `## <a ...></a>` to a bare `## `.
pub fn strip_heading_anchors(raw: &[u8]) -> Vec<u8> {
    HEADING_ANCHOR.replace_all(raw, &b"## "[..]).into_owned()
}

/// Full canonicalization applied once to the fetched document.
pub fn canonicalize(raw: &[u8]) -> Vec<u8> {
    strip_heading_anchors(&strip_raw_marker(raw))
}
