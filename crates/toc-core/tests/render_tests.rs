//! Tests for TOC block rendering

use pretty_assertions::assert_eq;
use toc_core::render::{AnchorInsertion, anchor_tag};
use toc_core::{
    IndentUnit, OptionKey, OverrideFlags, RenderHints, TextDocument, TocOptions, extract_headers,
    render,
};

const GUIDE: &str = "# Guide\n## Install\n### From source\n## Usage\n# Appendix\n";

fn hints(indent: IndentUnit) -> RenderHints<'static> {
    RenderHints { indent, eol: "\n" }
}

fn render_guide(options: &TocOptions, flags: &OverrideFlags, indent: IndentUnit) -> String {
    let headers = extract_headers(&TextDocument::new(GUIDE), options);
    render(&headers, options, flags, &hints(indent)).block
}

#[test]
fn test_render_default_block() {
    let block = render_guide(
        &TocOptions::default(),
        &OverrideFlags::new(),
        IndentUnit::Spaces(4),
    );
    insta::assert_snapshot!(block, @r###"
<!-- TOC -->

- [Guide](#guide)
    - [Install](#install)
        - [From source](#from-source)
    - [Usage](#usage)
- [Appendix](#appendix)

<!-- /TOC -->
"###);
}

#[test]
fn test_render_ordered_list() {
    let options = TocOptions {
        ordered_list: true,
        ..TocOptions::default()
    };
    let flags: OverrideFlags = [OptionKey::OrderedList].into_iter().collect();
    let block = render_guide(&options, &flags, IndentUnit::Spaces(2));
    insta::assert_snapshot!(block, @r###"
<!-- TOC orderedList:true -->

1. [Guide](#guide)
  1. [Install](#install)
    1. [From source](#from-source)
  2. [Usage](#usage)
2. [Appendix](#appendix)

<!-- /TOC -->
"###);
}

#[test]
fn test_render_plain_titles_from_depth_two() {
    let options = TocOptions {
        depth_from: 2,
        with_links: false,
        ..TocOptions::default()
    };
    let flags: OverrideFlags = [OptionKey::WithLinks, OptionKey::DepthFrom]
        .into_iter()
        .collect();
    let block = render_guide(&options, &flags, IndentUnit::Spaces(4));
    insta::assert_snapshot!(block, @r###"
<!-- TOC depthFrom:2 withLinks:false -->

- Install
    - From source
- Usage

<!-- /TOC -->
"###);
}

#[test]
fn test_render_tab_indent_and_crlf() {
    let options = TocOptions::default();
    let headers = extract_headers(&TextDocument::new("# A\n## B\n"), &options);
    let hints = RenderHints {
        indent: IndentUnit::Tab,
        eol: "\r\n",
    };
    let rendered = render(&headers, &options, &OverrideFlags::new(), &hints);
    assert_eq!(
        rendered.block,
        "<!-- TOC -->\r\n\r\n- [A](#a)\r\n\t- [B](#b)\r\n\r\n<!-- /TOC -->"
    );
}

#[test]
fn test_render_starts_at_shallowest_header() {
    let options = TocOptions::default();
    let headers = extract_headers(&TextDocument::new("### Deep\n#### Deeper\n"), &options);
    let rendered = render(
        &headers,
        &options,
        &OverrideFlags::new(),
        &hints(IndentUnit::Spaces(2)),
    );
    assert_eq!(
        rendered.block,
        "<!-- TOC -->\n\n- [Deep](#deep)\n  - [Deeper](#deeper)\n\n<!-- /TOC -->"
    );
}

#[test]
fn test_anchor_insertions() {
    let options = TocOptions {
        insert_anchor: true,
        ..TocOptions::default()
    };
    let headers = extract_headers(&TextDocument::new("text\n# A\n## A\n"), &options);
    let rendered = render(
        &headers,
        &options,
        &OverrideFlags::new(),
        &hints(IndentUnit::Spaces(4)),
    );
    assert_eq!(
        rendered.anchors,
        vec![
            AnchorInsertion {
                line_index: 1,
                tag: r#"<a id="markdown-a" name="a"></a>"#.to_string(),
            },
            AnchorInsertion {
                line_index: 2,
                tag: anchor_tag("a-1"),
            },
        ]
    );
}

#[test]
fn test_no_anchors_unless_requested() {
    let options = TocOptions::default();
    let headers = extract_headers(&TextDocument::new("# A\n"), &options);
    let rendered = render(
        &headers,
        &options,
        &OverrideFlags::new(),
        &hints(IndentUnit::Spaces(4)),
    );
    assert!(rendered.anchors.is_empty());
}
