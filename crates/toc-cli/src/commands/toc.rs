//! TOC block commands

use std::path::Path;

use colored::Colorize;
use toc_core::Position;
use toc_fs::FileDocument;

use super::{report, run_edit};
use crate::cli::EditArgs;
use crate::context::CommandContext;
use crate::error::{CliError, Result};

/// Refresh the block, or insert one at the 1-based `line`
pub fn run_update(ctx: &CommandContext, edit: &EditArgs, line: usize) -> Result<()> {
    if line == 0 {
        return Err(CliError::user("--line counts from 1"));
    }

    run_edit(ctx, edit, "Updated", |engine, doc| {
        Ok(engine.update_toc(Some(doc), Position::line_start(line - 1), false)?)
    })
}

pub fn run_delete(ctx: &CommandContext, edit: &EditArgs) -> Result<()> {
    run_edit(ctx, edit, "Deleted TOC from", |engine, doc| {
        Ok(engine.delete_toc(Some(doc))?)
    })
}

/// Behave as an editor's save hook for `file`
pub fn run_on_save(ctx: &CommandContext, file: &Path) -> Result<()> {
    let mut engine = ctx.engine_for(file)?;
    let mut doc = FileDocument::open(file)?;

    if engine.on_document_saved(Some(&mut doc))? {
        report("Updated", file);
    } else {
        println!("{} {} left as is", "=>".blue().bold(), file.display());
    }
    Ok(())
}
