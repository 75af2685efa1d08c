//! Marker-delimited splice
//!
//! A document holds at most one placed block, delimited by the start and end
//! markers. Splicing replaces that block, or appends one when the document
//! has none. Splicing the same block twice yields the same document.

use std::ops::Range;

use serde::Serialize;

use crate::config::MarkersConfig;

/// What a splice did to the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpliceKind {
    /// An existing block was replaced
    Replaced,
    /// No block was found, the new one was appended
    Appended,
    /// The existing block already carries the same html
    Unchanged,
}

/// Result of splicing a block into a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spliced {
    pub text: String,
    pub kind: SpliceKind,
}

impl Spliced {
    pub fn changed(&self) -> bool {
        self.kind != SpliceKind::Unchanged
    }
}

/// Locate the placed block in `document`.
///
/// The block ends at the first end marker that has a start marker before it,
/// and starts at the last start marker before that end marker. The range
/// covers both markers.
pub fn find_block(document: &str, markers: &MarkersConfig) -> Option<Range<usize>> {
    let (start, end) = (markers.start.as_str(), markers.end.as_str());
    if start.is_empty() || end.is_empty() {
        return None;
    }

    let mut search_from = 0;
    while let Some(offset) = document[search_from..].find(end) {
        let end_at = search_from + offset;
        if let Some(start_at) = document[..end_at].rfind(start) {
            // Markers sharing text (e.g. identical markers) must not overlap.
            if start_at + start.len() <= end_at {
                return Some(start_at..end_at + end.len());
            }
        }
        search_from = end_at + end.len();
    }
    None
}

/// Splice `block` into `document`.
///
/// `block` is expected to begin with the start marker and finish with the end
/// marker, as produced by [`BlockRenderer::render`](super::BlockRenderer::render).
pub fn splice(document: &str, block: &str, markers: &MarkersConfig) -> Spliced {
    match find_block(document, markers) {
        Some(range) => {
            let existing = &document[range.clone()];
            if payload(existing, markers) == payload(block, markers) {
                return Spliced {
                    text: document.to_string(),
                    kind: SpliceKind::Unchanged,
                };
            }

            let mut text = String::with_capacity(document.len() - range.len() + block.len());
            text.push_str(&document[..range.start]);
            text.push_str(block);
            text.push_str(&document[range.end..]);
            Spliced {
                text,
                kind: SpliceKind::Replaced,
            }
        }
        None => Spliced {
            text: format!("{document}\n\n{block}"),
            kind: SpliceKind::Appended,
        },
    }
}

/// The block minus its leading header comment, which carries the timestamp.
fn payload<'a>(block: &'a str, markers: &MarkersConfig) -> &'a str {
    let body = block.strip_prefix(markers.start.as_str()).unwrap_or(block);
    match body.strip_prefix("\n/*") {
        Some(rest) => match rest.find("*/") {
            Some(close) => &rest[close + 2..],
            None => body,
        },
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> MarkersConfig {
        MarkersConfig::default()
    }

    fn block(html: &str, stamp: &str) -> String {
        let m = markers();
        format!(
            "{}\n/*\nplaced from `a.html`.\n{}\n*/\nconst template = document.createElement('template');\ntemplate.innerHTML = `\n{}\n`;\n{}",
            m.start, stamp, html, m.end
        )
    }

    #[test]
    fn appends_when_document_has_no_markers() {
        let doc = "class Card extends HTMLElement {}";
        let b = block("<p>1</p>", "t1");

        let spliced = splice(doc, &b, &markers());

        assert_eq!(spliced.kind, SpliceKind::Appended);
        assert_eq!(spliced.text, format!("{doc}\n\n{b}"));
    }

    #[test]
    fn appends_to_empty_document() {
        let b = block("<p>1</p>", "t1");
        let spliced = splice("", &b, &markers());
        assert_eq!(spliced.text, format!("\n\n{b}"));
    }

    #[test]
    fn replaces_existing_block_and_keeps_surroundings() {
        let old = block("<p>old</p>", "t1");
        let new = block("<p>new</p>", "t2");
        let doc = format!("import x from './x.js';\n{old}\ncustomElements.define('x-card', Card);\n");

        let spliced = splice(&doc, &new, &markers());

        assert_eq!(spliced.kind, SpliceKind::Replaced);
        assert_eq!(
            spliced.text,
            format!("import x from './x.js';\n{new}\ncustomElements.define('x-card', Card);\n")
        );
    }

    #[test]
    fn same_html_with_new_timestamp_is_unchanged() {
        let doc = format!("head\n{}\ntail", block("<p>same</p>", "monday"));

        let spliced = splice(&doc, &block("<p>same</p>", "tuesday"), &markers());

        assert_eq!(spliced.kind, SpliceKind::Unchanged);
        assert!(!spliced.changed());
        assert_eq!(spliced.text, doc);
    }

    #[test]
    fn splicing_twice_is_idempotent() {
        let b = block("<p>x</p>", "t");
        for doc in ["", "let a = 1;", "a\n/*! -- START OF PLACED HTML -- */ dangling"] {
            let once = splice(doc, &b, &markers());
            let twice = splice(&once.text, &b, &markers());
            assert_eq!(once.text, twice.text, "doc: {doc:?}");
            assert_eq!(twice.kind, SpliceKind::Unchanged);
        }
    }

    #[test]
    fn lone_start_marker_is_not_a_block() {
        let m = markers();
        let doc = format!("a {} b", m.start);
        assert_eq!(find_block(&doc, &m), None);
    }

    #[test]
    fn end_marker_before_start_marker_is_ignored() {
        let m = markers();
        let doc = format!("{} x {}", m.end, m.start);
        assert_eq!(find_block(&doc, &m), None);

        let spliced = splice(&doc, &block("<p/>", "t"), &m);
        assert_eq!(spliced.kind, SpliceKind::Appended);
    }

    #[test]
    fn find_block_spans_both_markers() {
        let m = markers();
        let doc = format!("ab{}cd{}ef", m.start, m.end);

        let range = find_block(&doc, &m).unwrap();

        assert_eq!(range.start, 2);
        assert_eq!(&doc[range.end..], "ef");
    }

    #[test]
    fn identical_markers_need_two_occurrences() {
        let m = MarkersConfig {
            start: "//--".to_string(),
            end: "//--".to_string(),
        };
        assert_eq!(find_block("a //-- b", &m), None);
        assert_eq!(find_block("a //-- b //-- c", &m), Some(2..13));
    }

    #[test]
    fn empty_markers_never_match() {
        let m = MarkersConfig {
            start: String::new(),
            end: String::new(),
        };
        assert_eq!(find_block("anything", &m), None);
    }
}
