//! Tests for header extraction

use pretty_assertions::assert_eq;
use toc_core::{AnchorMode, TextDocument, TextRange, TocOptions, extract_headers};

fn titles(text: &str, options: &TocOptions) -> Vec<String> {
    extract_headers(&TextDocument::new(text), options)
        .into_iter()
        .map(|header| header.title)
        .collect()
}

fn prefixes(text: &str) -> Vec<String> {
    extract_headers(&TextDocument::new(text), &TocOptions::default())
        .into_iter()
        .map(|header| header.ordered_prefix)
        .collect()
}

#[test]
fn test_depth_filtering() {
    let source = "# One\n## Two\n### Three\n#### Four\n##### Five\n###### Six\n";
    let options = TocOptions {
        depth_from: 2,
        depth_to: 4,
        ..TocOptions::default()
    };

    let headers = extract_headers(&TextDocument::new(source), &options);
    let depths: Vec<_> = headers.iter().map(|h| h.depth).collect();
    let titles: Vec<_> = headers.iter().map(|h| h.title.as_str()).collect();
    let prefixes: Vec<_> = headers.iter().map(|h| h.ordered_prefix.as_str()).collect();

    assert_eq!(depths, vec![2, 3, 4]);
    assert_eq!(titles, vec!["Two", "Three", "Four"]);
    assert_eq!(prefixes, vec!["1.", "1.1.", "1.1.1."]);
}

#[test]
fn test_code_fences_are_skipped() {
    let source = r#"# Real
```sh
# not a header
```
~~~
## also not
```
## still not
~~~
## After
"#;
    assert_eq!(titles(source, &TocOptions::default()), vec!["Real", "After"]);
}

#[test]
fn test_unclosed_fence_hides_the_rest() {
    let source = "# Before\n```\n# Inside\n## Also inside\n";
    assert_eq!(titles(source, &TocOptions::default()), vec!["Before"]);
}

#[test]
fn test_numbering_resets_on_shallower_header() {
    let source = "# H1\n# H2\n## H2.1\n## H2.2\n# H3\n";
    assert_eq!(prefixes(source), vec!["1.", "2.", "2.1.", "2.2.", "3."]);
}

#[test]
fn test_numbering_after_irregular_jumps() {
    let source = "# A\n##### B\n## C\n##### D\n";
    assert_eq!(
        prefixes(source),
        vec!["1.", "1.0.0.0.1.", "1.1.", "1.1.0.0.1."]
    );
}

#[test]
fn test_nested_numbering_continues_after_return() {
    let source = "# A\n## B\n### C\n### D\n## E\n";
    assert_eq!(prefixes(source), vec!["1.", "1.1.", "1.1.1.", "1.1.2.", "1.2."]);
}

#[test]
fn test_duplicate_titles_get_distinct_anchors() {
    let source = "## Usage\n## Usage\n## Usage\n";
    let anchors: Vec<_> = extract_headers(&TextDocument::new(source), &TocOptions::default())
        .into_iter()
        .map(|header| header.anchor)
        .collect();
    assert_eq!(anchors, vec!["usage", "usage-1", "usage-2"]);
}

#[test]
fn test_ignored_header_does_not_count() {
    let source = "# A\n## Skip <!-- TOC ignore:true -->\n## B\n";
    let headers = extract_headers(&TextDocument::new(source), &TocOptions::default());
    assert_eq!(headers.len(), 2);
    assert_eq!(headers[1].title, "B");
    assert_eq!(headers[1].ordered_prefix, "1.1.");
}

#[test]
fn test_record_fields() {
    let source = "intro\n## [Link](http://a) and __bold__ <!-- c -->\n";
    let headers = extract_headers(&TextDocument::new(source), &TocOptions::default());
    assert_eq!(headers.len(), 1);

    let header = &headers[0];
    assert_eq!(header.line_index, 1);
    assert_eq!(header.depth, 2);
    assert_eq!(header.marker, "##");
    assert_eq!(header.title, "Link and bold");
    assert_eq!(
        header.base_title,
        "[Link](http://a) and __bold__ <!-- c -->"
    );
    assert_eq!(header.anchor, "link-and-bold");
    assert_eq!(header.span, TextRange::line(1, 43));
}

#[test]
fn test_anchor_mode_is_applied() {
    let options = TocOptions {
        anchor_mode: AnchorMode::Bitbucket,
        ..TocOptions::default()
    };
    let headers = extract_headers(&TextDocument::new("# Getting Started\n"), &options);
    assert_eq!(headers[0].anchor, "markdown-header-getting-started");
}

#[test]
fn test_line_indices_increase() {
    let source = "# A\n\ntext\n## B\n### C\n\n# D\n";
    let headers = extract_headers(&TextDocument::new(source), &TocOptions::default());
    assert!(headers.windows(2).all(|w| w[0].line_index < w[1].line_index));
}

#[test]
fn test_crlf_document() {
    let source = "# One\r\n## Two\r\n";
    let headers = extract_headers(&TextDocument::new(source), &TocOptions::default());
    assert_eq!(headers[1].title, "Two");
    assert_eq!(headers[1].span, TextRange::line(1, 6));
}
