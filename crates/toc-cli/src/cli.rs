//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// mdtoc - Keep Markdown tables of contents in sync with their headers
#[derive(Parser, Debug)]
#[command(name = "mdtoc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Workspace config file, instead of searching for .markdown-toc.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the global config.toml
    #[arg(long, global = true, env = "MDTOC_GLOBAL_CONFIG_DIR", value_name = "DIR")]
    pub global_config_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Arguments shared by the commands that rewrite a file
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct EditArgs {
    /// Markdown file to edit
    pub file: PathBuf,

    /// Print a diff instead of writing the file
    #[arg(long)]
    pub dry_run: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Insert a table of contents, or refresh the existing one
    ///
    /// A new block is inserted above the text of the target line. Deleting
    /// it later leaves that line break behind, so insert on an empty line
    /// when an exact undo matters.
    ///
    /// Examples:
    ///   mdtoc update README.md             # Refresh, or insert at the top
    ///   mdtoc update README.md --line 3    # Insert a new block at line 3
    ///   mdtoc update README.md --dry-run   # Show what would change
    Update {
        #[command(flatten)]
        edit: EditArgs,

        /// 1-based line where a new block is inserted
        #[arg(long, default_value_t = 1)]
        line: usize,
    },

    /// Remove the table of contents and its anchor tags
    Delete {
        #[command(flatten)]
        edit: EditArgs,
    },

    /// Number every header (1., 1.1., ...)
    UpdateSections {
        #[command(flatten)]
        edit: EditArgs,
    },

    /// Remove header numbering
    DeleteSections {
        #[command(flatten)]
        edit: EditArgs,
    },

    /// Run the save hook: refresh an existing block if updateOnSave allows it
    OnSave {
        /// Markdown file that was saved
        file: PathBuf,
    },

    /// List the headers that would appear in the table of contents
    Headers {
        /// Markdown file to read
        file: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_update_defaults() {
        let cli = Cli::try_parse_from(["mdtoc", "update", "README.md"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Update {
                edit: EditArgs {
                    file: PathBuf::from("README.md"),
                    dry_run: false,
                },
                line: 1,
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mdtoc",
            "delete",
            "doc.md",
            "--dry-run",
            "-v",
            "--config",
            "toc.toml",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("toc.toml")));
        assert!(matches!(
            cli.command,
            Some(Commands::Delete { edit }) if edit.dry_run
        ));
    }

    #[test]
    fn test_headers_json_flag() {
        let cli = Cli::try_parse_from(["mdtoc", "headers", "doc.md", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Headers { json: true, .. })));
    }
}
