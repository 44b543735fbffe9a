//! Sample Markdown documents.

/// Three levels of headers, no TOC block.
pub const GUIDE: &str = "# Guide

Intro paragraph.

## Install

### From source

## Usage
";

/// [`GUIDE`] after `mdtoc update --line 3`.
pub const GUIDE_WITH_TOC: &str = "# Guide

<!-- TOC -->

- [Guide](#guide)
    - [Install](#install)
        - [From source](#from-source)
    - [Usage](#usage)

<!-- /TOC -->
Intro paragraph.

## Install

### From source

## Usage
";

/// Headers hidden inside fenced code blocks.
pub const FENCED: &str = "# Shell

```sh
# a comment, not a header
```

~~~
## also hidden
~~~

## Visible
";

/// An existing block whose marker carries inline options.
pub const WITH_OPTIONS: &str = "<!-- TOC depthFrom:2 orderedList:true -->
- stale entry
<!-- /TOC -->

# Title

## First

## Second

### Nested
";

/// [`GUIDE`] with Windows line endings.
pub fn guide_crlf() -> String {
    GUIDE.replace('\n', "\r\n")
}
