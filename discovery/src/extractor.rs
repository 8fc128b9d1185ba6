//! Symbol extraction from HTML help pages.
//!
//! Three passes run over each parsed page:
//!
//! 1. **Hyperlinks**: every `<a href>`; the link text is the symbol and the
//!    resolved target is the URL.
//! 2. **Headings**: every `<h3>` holding an `<a name>`; the heading text is
//!    the symbol and the anchor is the URL.
//! 3. **Constants tables**: every `<table class="apiConstantsTable">`; each
//!    `<div>` inside names a constant, and all of them point at the anchor of
//!    the nearest preceding sibling `<h3>`.
//!
//! Candidates are returned unfiltered; symbol validation happens when they
//! are added to an [`ApiIndex`](api_index_core::ApiIndex).

use api_index_core::{Candidate, CandidateKind};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::discover::{DiscoverError, HelpFile};

/// Compiled selectors for the three extraction passes.
#[derive(Debug, Clone)]
pub struct HelpExtractor {
    links: Selector,
    headings: Selector,
    named_anchors: Selector,
    constants_tables: Selector,
    constant_cells: Selector,
}

impl HelpExtractor {
    /// Builds an extractor for tables tagged with `constants_table_class`.
    ///
    /// Fails with [`DiscoverError::InvalidSelector`] unless the class is a
    /// plain identifier (ASCII letters, digits, `-`, `_`, not starting with a
    /// digit).
    pub fn new(constants_table_class: &str) -> Result<Self, DiscoverError> {
        if !is_class_identifier(constants_table_class) {
            return Err(DiscoverError::InvalidSelector(format!(
                "'{constants_table_class}': not a plain class name"
            )));
        }

        Ok(Self {
            links: parse_selector("a[href]")?,
            headings: parse_selector("h3")?,
            named_anchors: parse_selector("a[name]")?,
            constants_tables: parse_selector(&format!("table.{constants_table_class}"))?,
            constant_cells: parse_selector("div")?,
        })
    }

    /// Extracts all candidates from one page, in pass order.
    ///
    /// Parsing is best-effort: malformed markup yields whatever structure the
    /// HTML5 tree builder recovers.
    pub fn extract(&self, html: &str, file: &HelpFile) -> Vec<Candidate> {
        let document = Html::parse_document(html);
        let mut candidates = Vec::new();

        self.extract_links(&document, file, &mut candidates);
        self.extract_headings(&document, file, &mut candidates);
        self.extract_constants(&document, file, &mut candidates);

        candidates
    }

    fn extract_links(&self, document: &Html, file: &HelpFile, out: &mut Vec<Candidate>) {
        for anchor in document.select(&self.links) {
            let Some(url) = anchor
                .value()
                .attr("href")
                .and_then(|href| file.resolve_href(href))
            else {
                continue;
            };
            out.push(Candidate::new(
                element_text(anchor),
                url,
                CandidateKind::Hyperlink,
            ));
        }
    }

    fn extract_headings(&self, document: &Html, file: &HelpFile, out: &mut Vec<Candidate>) {
        for heading in document.select(&self.headings) {
            let Some(name) = self.anchor_name(heading) else {
                continue;
            };
            out.push(Candidate::new(
                element_text(heading),
                file.anchor_url(name),
                CandidateKind::Heading,
            ));
        }
    }

    fn extract_constants(&self, document: &Html, file: &HelpFile, out: &mut Vec<Candidate>) {
        for table in document.select(&self.constants_tables) {
            let Some(heading) = preceding_heading(table) else {
                debug!(file = %file.rel_file, "Constants table without preceding heading");
                continue;
            };
            let Some(name) = self.anchor_name(heading) else {
                debug!(file = %file.rel_file, "Constants table heading has no named anchor");
                continue;
            };

            let url = file.anchor_url(name);
            for cell in table.select(&self.constant_cells) {
                out.push(Candidate::new(
                    element_text(cell).trim(),
                    url.as_str(),
                    CandidateKind::Constant,
                ));
            }
        }
    }

    /// First `name` attribute of an anchor nested in `element`.
    fn anchor_name<'a>(&self, element: ElementRef<'a>) -> Option<&'a str> {
        element
            .select(&self.named_anchors)
            .next()
            .and_then(|anchor| anchor.value().attr("name"))
    }
}

fn is_class_identifier(class: &str) -> bool {
    let mut chars = class.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_' || first == '-')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn parse_selector(css: &str) -> Result<Selector, DiscoverError> {
    Selector::parse(css).map_err(|err| DiscoverError::InvalidSelector(format!("'{css}': {err}")))
}

/// Concatenated descendant text, untrimmed.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Nearest preceding sibling element that is an `<h3>`.
fn preceding_heading(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element
        .prev_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().name() == "h3")
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn extractor() -> HelpExtractor {
        HelpExtractor::new(crate::discover::DEFAULT_CONSTANTS_TABLE_CLASS).unwrap()
    }

    fn file(rel: &str) -> HelpFile {
        HelpFile::new(Path::new("/docs"), &Path::new("/docs").join(rel)).unwrap()
    }

    fn pairs(candidates: &[Candidate], kind: CandidateKind) -> Vec<(&str, &str)> {
        candidates
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| (c.symbol.as_str(), c.url.as_str()))
            .collect()
    }

    #[test]
    fn test_links_resolve_fragments_and_relative_paths() {
        let html = r##"<html><body>
            <a href="#simFoo">simFoo</a>
            <a href="bar.htm">simxBar</a>
            <a href="baz.htm">sim Space</a>
        </body></html>"##;
        let candidates = extractor().extract(html, &file("foo.htm"));
        assert_eq!(
            pairs(&candidates, CandidateKind::Hyperlink),
            vec![
                ("simFoo", "foo.htm#simFoo"),
                ("simxBar", "bar.htm"),
                ("sim Space", "baz.htm"),
            ]
        );
    }

    #[test]
    fn test_links_in_subdirectory_resolve_against_directory() {
        let html = r#"<a href="../other.htm">simOther</a><a href="x.htm#y">simX</a>"#;
        let candidates = extractor().extract(html, &file("sub/page.htm"));
        assert_eq!(
            pairs(&candidates, CandidateKind::Hyperlink),
            vec![("simOther", "other.htm"), ("simX", "sub/x.htm#y")]
        );
    }

    #[test]
    fn test_link_text_includes_nested_markup() {
        let html = r#"<a href="f.htm"><code>sim</code>Foo</a>"#;
        let candidates = extractor().extract(html, &file("i.htm"));
        assert_eq!(
            pairs(&candidates, CandidateKind::Hyperlink),
            vec![("simFoo", "f.htm")]
        );
    }

    #[test]
    fn test_anchors_without_href_or_with_empty_href_are_not_links() {
        let html = r#"<a name="simFoo">simFoo</a><a href="">simEmpty</a>"#;
        let candidates = extractor().extract(html, &file("i.htm"));
        assert!(pairs(&candidates, CandidateKind::Hyperlink).is_empty());
    }

    #[test]
    fn test_heading_with_named_anchor() {
        let html = r#"<h3><a name="simWidget"></a>simWidget</h3>"#;
        let candidates = extractor().extract(html, &file("w.htm"));
        assert_eq!(
            pairs(&candidates, CandidateKind::Heading),
            vec![("simWidget", "w.htm#simWidget")]
        );
    }

    #[test]
    fn test_heading_without_named_anchor_is_skipped() {
        let html = r#"<h3>simPlain</h3><h3><a href="x.htm">simLinked</a></h3>"#;
        let candidates = extractor().extract(html, &file("w.htm"));
        assert!(pairs(&candidates, CandidateKind::Heading).is_empty());
        assert_eq!(
            pairs(&candidates, CandidateKind::Hyperlink),
            vec![("simLinked", "x.htm")]
        );
    }

    #[test]
    fn test_only_level_three_headings_count() {
        let html = r#"<h2><a name="simTwo"></a>simTwo</h2><h4><a name="simFour"></a>simFour</h4>"#;
        let candidates = extractor().extract(html, &file("w.htm"));
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_constants_table_uses_preceding_heading_anchor() {
        let html = r#"<html><body>
            <h3><a name="simConsts"></a>Constants</h3>
            <p>Values accepted by the flags parameter.</p>
            <table class="apiConstantsTable"><tr><td>
                <div>simFLAG_A</div>
                <div> simFLAG_B
                </div>
            </td></tr></table>
        </body></html>"#;
        let candidates = extractor().extract(html, &file("consts.htm"));
        assert_eq!(
            pairs(&candidates, CandidateKind::Constant),
            vec![
                ("simFLAG_A", "consts.htm#simConsts"),
                ("simFLAG_B", "consts.htm#simConsts"),
            ]
        );
        assert_eq!(
            pairs(&candidates, CandidateKind::Heading),
            vec![("Constants", "consts.htm#simConsts")]
        );
    }

    #[test]
    fn test_constants_table_picks_nearest_heading() {
        let html = r#"<body>
            <h3><a name="first"></a>First</h3>
            <h3><a name="second"></a>Second</h3>
            <table class="wide apiConstantsTable"><tr><td><div>simA</div></td></tr></table>
        </body>"#;
        let candidates = extractor().extract(html, &file("c.htm"));
        assert_eq!(
            pairs(&candidates, CandidateKind::Constant),
            vec![("simA", "c.htm#second")]
        );
    }

    #[test]
    fn test_constants_table_without_heading_is_skipped() {
        let html = r#"<body>
            <table class="apiConstantsTable"><tr><td><div>simA</div></td></tr></table>
            <h3><a name="after"></a>After</h3>
        </body>"#;
        let candidates = extractor().extract(html, &file("c.htm"));
        assert!(pairs(&candidates, CandidateKind::Constant).is_empty());
    }

    #[test]
    fn test_constants_table_heading_without_anchor_is_skipped() {
        let html = r#"<body>
            <h3>Constants</h3>
            <table class="apiConstantsTable"><tr><td><div>simA</div></td></tr></table>
        </body>"#;
        let candidates = extractor().extract(html, &file("c.htm"));
        assert!(pairs(&candidates, CandidateKind::Constant).is_empty());
    }

    #[test]
    fn test_untagged_tables_are_ignored() {
        let html = r#"<body>
            <h3><a name="h"></a>Heading</h3>
            <table class="apiTable"><tr><td><div>simA</div></td></tr></table>
        </body>"#;
        let candidates = extractor().extract(html, &file("c.htm"));
        assert!(pairs(&candidates, CandidateKind::Constant).is_empty());
    }

    #[test]
    fn test_custom_constants_class() {
        let html = r#"<body>
            <h3><a name="enums"></a>Enums</h3>
            <table class="enumTable"><tr><td><div>simE</div></td></tr></table>
        </body>"#;
        let extractor = HelpExtractor::new("enumTable").unwrap();
        let candidates = extractor.extract(html, &file("e.htm"));
        assert_eq!(
            pairs(&candidates, CandidateKind::Constant),
            vec![("simE", "e.htm#enums")]
        );
    }

    #[test]
    fn test_malformed_markup_still_extracts() {
        let html = r##"<div><a href="#simFoo">simFoo</a><p>unclosed <b>bold</i></table></span>"##;
        let candidates = extractor().extract(html, &file("bad.htm"));
        assert!(
            candidates
                .iter()
                .any(|c| c.symbol == "simFoo" && c.url == "bad.htm#simFoo")
        );
    }

    #[test]
    fn test_invalid_class_names_are_rejected() {
        for class in ["", "two words", "1abc", "a>b", "x.y"] {
            let err = HelpExtractor::new(class).unwrap_err();
            assert!(matches!(err, DiscoverError::InvalidSelector(_)), "{class}");
        }
    }
}
