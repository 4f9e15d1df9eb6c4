// src/document/markdown.rs
// =============================================================================
// This module extracts image paths from inline markdown link syntax.
//
// Matches the shape [label](path) where path ends in png, jpg, gif or svg.
// Because ![alt](path) contains [alt](path), image embeds are covered too, as
// are badges nested inside links: [![ci](img/ci.svg)](https://ci.example).
//
// Paths the HTML pass already reported are reported again here.
// =============================================================================

use std::sync::LazyLock;

use regex::Regex;

use super::is_local_reference;

static INLINE_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[^\]\n]*\]\(\s*([^)\s]+\.(?:png|jpg|gif|svg))\s*\)").expect("valid regex")
});

// Extracts repository-local image paths from inline links, in document order
//
// Example:
//   "See ![diagram](images/diagram.png) and [logo](https://x/logo.png)"
//   -> ["images/diagram.png"]
pub fn extract_inline_images(text: &str) -> Vec<String> {
    INLINE_IMAGE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|path| is_local_reference(path))
        .map(str::to_string)
        .collect()
}
