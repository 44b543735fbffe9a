//! Command implementations

mod headers;
mod preview;
mod sections;
mod toc;

pub use headers::run_headers;
pub use sections::{run_delete_sections, run_update_sections};
pub use toc::{run_delete, run_on_save, run_update};

use std::path::Path;

use colored::Colorize;
use toc_core::{SaveDocument, TocEngine};
use toc_fs::FileDocument;

use crate::cli::EditArgs;
use crate::context::CommandContext;
use crate::error::Result;

/// Open `edit.file`, run `op` on it in memory, then write or preview the result.
///
/// The file is left untouched when the operation produced no textual change.
pub(crate) fn run_edit<F>(ctx: &CommandContext, edit: &EditArgs, verb: &str, op: F) -> Result<()>
where
    F: FnOnce(&mut TocEngine, &mut FileDocument) -> Result<bool>,
{
    let mut engine = ctx.engine_for(&edit.file)?;
    let mut doc = FileDocument::open(&edit.file)?;
    let before = doc.text().to_string();

    let applied = op(&mut engine, &mut doc)?;
    if !applied || doc.text() == before {
        println!("{} No changes for {}", "=>".blue().bold(), edit.file.display());
        return Ok(());
    }

    if edit.dry_run {
        preview::print_diff(&edit.file, &before, doc.text());
        return Ok(());
    }

    doc.save()?;
    report(verb, &edit.file);
    Ok(())
}

fn report(verb: &str, path: &Path) {
    println!("{} {}", verb.green().bold(), path.display());
}
