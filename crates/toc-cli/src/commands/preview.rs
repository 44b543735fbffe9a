//! Dry-run output

use std::path::Path;

use colored::Colorize;
use similar::TextDiff;

/// Unified diff between two versions of `path`
pub fn unified_diff(path: &Path, before: &str, after: &str) -> String {
    let name = path.display().to_string();
    let old_header = format!("a/{name}");
    let new_header = format!("b/{name}");

    let diff = TextDiff::from_lines(before, after);
    diff.unified_diff()
        .context_radius(3)
        .header(&old_header, &new_header)
        .to_string()
}

pub(crate) fn print_diff(path: &Path, before: &str, after: &str) {
    for line in unified_diff(path, before, after).lines() {
        let styled = if line.starts_with("+++") || line.starts_with("---") {
            line.bold()
        } else if line.starts_with('+') {
            line.green()
        } else if line.starts_with('-') {
            line.red()
        } else if line.starts_with("@@") {
            line.cyan()
        } else {
            line.normal()
        };
        println!("{styled}");
    }
}
