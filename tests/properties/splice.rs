//! Property tests for placing blocks between markers.

use proptest::prelude::*;

use place_html::config::{MarkersConfig, TemplateConfig};
use place_html::{find_block, splice, BlockRenderer, SpliceKind};

/// Text that can never contain a marker (markers need `/` and `*`)
fn plain_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 <>=\"'{};().\n-]{0,200}").unwrap()
}

fn renderer() -> BlockRenderer {
    BlockRenderer::new(MarkersConfig::default(), TemplateConfig::default(), "place-html")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `find_block` never panics, whatever the document holds.
    #[test]
    fn property_find_block_never_panics(doc in "(?s).{0,256}") {
        let markers = MarkersConfig::default();
        if let Some(range) = find_block(&doc, &markers) {
            prop_assert!(doc[range].starts_with(&markers.start));
        }
    }

    /// PROPERTY: placing the same html again changes nothing, even at a later time.
    #[test]
    fn property_splice_is_idempotent(doc in plain_text(), html in plain_text()) {
        let markers = MarkersConfig::default();
        let renderer = renderer();

        let first = splice(&doc, &renderer.render("a.html", &html, "monday"), &markers);
        prop_assert!(first.changed());

        let second = splice(&first.text, &renderer.render("a.html", &html, "tuesday"), &markers);
        prop_assert_eq!(second.kind, SpliceKind::Unchanged);
        prop_assert_eq!(second.text, first.text);
    }

    /// PROPERTY: text before and after the placed block survives a replacement.
    #[test]
    fn property_splice_preserves_surrounding_text(
        before in plain_text(),
        after in plain_text(),
        old_html in plain_text(),
        new_html in plain_text(),
    ) {
        prop_assume!(old_html != new_html);
        let markers = MarkersConfig::default();
        let renderer = renderer();

        let doc = format!("{before}{}{after}", renderer.render("a.html", &old_html, "then"));
        let block = renderer.render("a.html", &new_html, "now");
        let spliced = splice(&doc, &block, &markers);

        prop_assert_eq!(spliced.kind, SpliceKind::Replaced);
        prop_assert_eq!(spliced.text, format!("{before}{block}{after}"));
    }

    /// PROPERTY: appending keeps the original document as a prefix.
    #[test]
    fn property_append_keeps_document_prefix(doc in plain_text(), html in plain_text()) {
        let markers = MarkersConfig::default();
        let block = renderer().render("a.html", &html, "now");

        let spliced = splice(&doc, &block, &markers);
        prop_assert_eq!(spliced.kind, SpliceKind::Appended);
        prop_assert_eq!(spliced.text, format!("{doc}\n\n{block}"));
    }
}
