//! Header listing

use std::path::Path;

use colored::Colorize;
use toc_fs::FileDocument;

use crate::context::CommandContext;
use crate::error::Result;

/// Print the headers the TOC would list, indented by depth
pub fn run_headers(ctx: &CommandContext, file: &Path, json: bool) -> Result<()> {
    let engine = ctx.engine_for(file)?;
    let doc = FileDocument::open(file)?;
    let headers = engine.headers(&doc);

    if json {
        println!("{}", serde_json::to_string_pretty(&headers)?);
        return Ok(());
    }

    if headers.is_empty() {
        println!("{} No headers found in {}", "=>".blue().bold(), file.display());
        return Ok(());
    }

    let shallowest = headers.iter().map(|h| h.depth).min().unwrap_or_default();
    for header in &headers {
        let indent = "  ".repeat(header.depth - shallowest);
        println!(
            "{}{} {} {}",
            indent,
            header.ordered_prefix.dimmed(),
            header.title,
            format!("#{}", header.anchor).cyan()
        );
    }
    Ok(())
}
