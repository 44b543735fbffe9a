//! Anchor hashing for header titles
//!
//! Each hosting convention slugifies header text differently and has its own
//! rule for headers that repeat on the same page. [`hash`] reproduces those
//! rules so that generated links land on the anchors the host renders.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Hosting convention used to compute anchors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorMode {
    #[default]
    #[serde(rename = "github.com")]
    GitHub,
    #[serde(rename = "bitbucket.org")]
    Bitbucket,
    #[serde(rename = "ghost.org")]
    Ghost,
    #[serde(rename = "gitlab.com")]
    GitLab,
}

impl AnchorMode {
    /// Supported conventions. The first entry is the fallback.
    pub const ALL: [AnchorMode; 4] = [
        AnchorMode::GitHub,
        AnchorMode::Bitbucket,
        AnchorMode::Ghost,
        AnchorMode::GitLab,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GitHub => "github.com",
            Self::Bitbucket => "bitbucket.org",
            Self::Ghost => "ghost.org",
            Self::GitLab => "gitlab.com",
        }
    }

    /// Exact, case-sensitive match against the convention names
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == value)
    }

    /// Like [`AnchorMode::parse`], falling back to the first convention
    pub fn parse_or_default(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }
}

impl fmt::Display for AnchorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static ESCAPE_CODES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)%([abcdef]|\d){2}").expect("Invalid escape code regex"));

static HTML_OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([^<>/\s]+)[^<>]*>").expect("Invalid open tag regex"));

static MARKDOWN_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[.*\]\(.*\)").expect("Invalid image regex"));

static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*)\]\(.*\)").expect("Invalid link regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static HYPHEN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("Invalid hyphen regex"));

const GITHUB_REMOVED: &[char] = &[
    '/', '?', '!', ':', '[', ']', '`', '.', ',', '(', ')', '*', '"', '\'', ';', '{', '}', '+', '=',
    '<', '>', '~', '$', '|', '#', '@', '&', '–', '—',
];

const GITLAB_REMOVED: &[char] = &[
    '/', '?', '!', ':', '[', ']', '`', '.', ',', '(', ')', '*', '"', '\'', ';', '{', '}', '+', '=',
    '<', '>', '~', '$', '|', '#', '@',
];

const GHOST_REMOVED: &[char] = &[
    '/', '?', ':', '[', ']', '`', '.', ',', '(', ')', '*', '"', '\'', ';', '{', '}', '-', '+', '=',
    '<', '>', '!', '@', '#', '%', '^', '&', '\\', '|',
];

const CJK_PUNCTUATION: &[char] = &[
    '。', '？', '！', '，', '、', '；', '：', '“', '”', '【', '】', '（', '）', '〔', '〕', '［', '］',
    '﹃', '﹄', '‘', '’', '﹁', '﹂', '—', '…', '－', '～', '《', '》', '〈', '〉', '「', '」',
];

/// Compute the anchor fragment (without `#`) for `title`.
///
/// `repetition` counts earlier headers with the same title: 0 for the first
/// occurrence, 1 for the second, and so on.
pub fn hash(title: &str, mode: AnchorMode, repetition: usize) -> String {
    let text = title.trim().to_lowercase();
    match mode {
        AnchorMode::GitHub => github_id(&text, repetition),
        AnchorMode::Bitbucket => bitbucket_id(&text, repetition),
        AnchorMode::Ghost => ghost_id(&text),
        AnchorMode::GitLab => gitlab_id(&text, repetition),
    }
}

fn github_base(text: &str) -> String {
    let hyphenated = text.replace(' ', "-");
    ESCAPE_CODES
        .replace_all(&hyphenated, "")
        .chars()
        .filter(|c| !GITHUB_REMOVED.contains(c) && !CJK_PUNCTUATION.contains(c))
        .collect()
}

fn github_id(text: &str, repetition: usize) -> String {
    let mut id = github_base(text);
    if repetition > 0 {
        id.push_str(&format!("-{repetition}"));
    }
    id.chars().filter(|c| !is_emoji(*c)).collect()
}

fn bitbucket_id(text: &str, repetition: usize) -> String {
    let mut id = format!("markdown-header-{}", github_base(text));
    if repetition > 0 {
        id.push_str(&format!("_{repetition}"));
    }
    id
}

fn ghost_id(text: &str) -> String {
    text.chars()
        .filter(|c| *c != ' ' && !GHOST_REMOVED.contains(c))
        .map(|c| match c {
            '$' => 'd',
            '~' => 't',
            other => other,
        })
        .collect()
}

fn gitlab_id(text: &str, repetition: usize) -> String {
    let text = strip_paired_tags(text);
    let text = MARKDOWN_IMAGE.replace_all(&text, "");
    let text = MARKDOWN_LINK.replace(&text, "$1");
    let text = WHITESPACE_RUN.replace_all(&text, "-");
    let text: String = text
        .chars()
        .filter(|c| !GITLAB_REMOVED.contains(c) && !CJK_PUNCTUATION.contains(c))
        .collect();
    let mut id = HYPHEN_RUN
        .replace_all(&text, "-")
        .trim_matches('-')
        .to_string();
    if repetition > 0 {
        id.push_str(&format!("-{repetition}"));
    }
    id
}

/// Replace `<tag ...>inner</tag>` with `inner`, leaving unpaired tags alone
fn strip_paired_tags(text: &str) -> String {
    let mut result = text.to_string();
    let mut from = 0;
    while let Some(caps) = HTML_OPEN_TAG.captures_at(&result, from) {
        let (Some(open), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let (open_start, open_end) = (open.start(), open.end());
        let close_tag = format!("</{}>", name.as_str());
        match result[open_end..].find(&close_tag) {
            Some(offset) => {
                let close_start = open_end + offset;
                let inner = result[open_end..close_start].to_string();
                result.replace_range(open_start..close_start + close_tag.len(), &inner);
                from = open_start;
            }
            None => from = open_end,
        }
    }
    result
}

fn is_emoji(c: char) -> bool {
    matches!(
        c as u32,
        0x1F000..=0x1FAFF | 0x2600..=0x27BF | 0x2B00..=0x2BFF | 0xFE0F | 0x200D | 0x20E3
    )
}
