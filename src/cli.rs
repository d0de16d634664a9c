//! CLI argument parsing for note-placer.
//!
//! Uses clap derive macros; the command implementations live in `main.rs`.

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use note_placer::{Locale, PlacementMode};

/// Decide which vault folder new notes belong in, and edit the placement settings.
#[derive(Parser, Debug)]
#[command(name = "note-placer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding placement.yaml
    #[arg(long, global = true, default_value = ".note-placer")]
    pub settings_dir: Utf8PathBuf,

    /// Directory for rotating log files
    #[arg(long, global = true, default_value = "logs")]
    pub log_dir: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the folder each document path would be created in.
    Resolve(ResolveArgs),

    /// Set the placement mode.
    Mode {
        #[arg(value_enum)]
        mode: PlacementMode,
    },

    /// Set the fixed-folder expression used by the `folder` mode.
    ///
    /// Accepts `${current}` and `${root}` prefixes.
    Folder { expression: String },

    /// Show or replace the placement rules.
    #[command(subcommand)]
    Rules(RulesCommand),

    /// Set the language of fallback notices.
    Locale {
        #[arg(value_enum)]
        locale: Locale,
    },

    /// Print the persisted settings as YAML.
    Show,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Vault root directory
    #[arg(long)]
    pub vault: Utf8PathBuf,

    /// Document paths, relative to the vault root
    #[arg(required = true)]
    pub doc_paths: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum RulesCommand {
    /// Print the rules, one `pattern: target` per line.
    Show,

    /// Replace the rules from a file of `pattern: target` lines (`-` for stdin).
    Set { file: String },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
