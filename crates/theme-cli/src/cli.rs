//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Theme Guard - Keep theme customizations across updates
#[derive(Parser, Debug)]
#[command(name = "theme-guard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (TOML, JSON or YAML); defaults to <theme>/theme-guard.toml
    #[arg(short, long, global = true, env = "THEME_GUARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show theme headers, backup location and update-checker settings
    Info {
        /// Theme directory
        #[arg(default_value = ".")]
        theme: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Back up the theme as the pre-update step would
    Backup {
        /// Theme directory
        #[arg(default_value = ".")]
        theme: PathBuf,
    },

    /// Restore customizations from a backup over the installed theme
    ///
    /// Examples:
    ///   theme-guard restore ./astra-child --backup ./astra-child-backup-1.0.0
    Restore {
        /// Theme directory
        #[arg(default_value = ".")]
        theme: PathBuf,

        /// Backup directory to restore from
        #[arg(short, long)]
        backup: PathBuf,
    },

    /// Install a new theme release while keeping customizations
    ///
    /// Backs up the theme, replaces it with the package, then restores
    /// every customized file outside the skip list.
    ///
    /// Examples:
    ///   theme-guard update ./astra-child --package /tmp/astra-child-2.0
    Update {
        /// Theme directory
        #[arg(default_value = ".")]
        theme: PathBuf,

        /// Unpacked theme package to install
        #[arg(short, long)]
        package: PathBuf,
    },

    /// List backups stored next to the theme
    List {
        /// Theme directory
        #[arg(default_value = ".")]
        theme: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show files that differ between a backup and the installed theme
    Diff {
        /// Theme directory
        #[arg(default_value = ".")]
        theme: PathBuf,

        /// Backup directory to compare against
        #[arg(short, long)]
        backup: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   theme-guard completions bash > ~/.local/share/bash-completion/completions/theme-guard
    ///   theme-guard completions zsh > ~/.zfunc/_theme-guard
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
