//! Header numbering commands

use super::run_edit;
use crate::cli::EditArgs;
use crate::context::CommandContext;
use crate::error::Result;

pub fn run_update_sections(ctx: &CommandContext, edit: &EditArgs) -> Result<()> {
    run_edit(ctx, edit, "Numbered", |engine, doc| {
        Ok(engine.update_sections(Some(doc))?)
    })
}

pub fn run_delete_sections(ctx: &CommandContext, edit: &EditArgs) -> Result<()> {
    run_edit(ctx, edit, "Unnumbered", |engine, doc| {
        Ok(engine.delete_sections(Some(doc))?)
    })
}
