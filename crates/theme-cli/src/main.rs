//! Theme Guard CLI
//!
//! Backs up, updates and restores customized themes from the command line.

mod cli;
mod commands;
mod context;
mod error;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("{} tracing already initialized", "warning:".yellow().bold());
        }
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.config.as_deref(), cli.verbose),
        None => {
            println!(
                "{} Keep theme customizations across updates",
                "theme-guard".green().bold()
            );
            println!();
            println!("Run {} for available commands.", "theme-guard --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, config: Option<&std::path::Path>, verbose: bool) -> Result<()> {
    match cmd {
        Commands::Info { theme, json } => commands::run_info(&theme, config, json),
        Commands::Backup { theme } => commands::run_backup(&theme, config),
        Commands::Restore { theme, backup } => commands::run_restore(&theme, &backup, config),
        Commands::Update { theme, package } => commands::run_update(&theme, &package, config),
        Commands::List { theme, json } => commands::run_list(&theme, config, json),
        Commands::Diff {
            theme,
            backup,
            json,
        } => commands::run_diff(&theme, &backup, config, json, verbose),
        Commands::Completions { shell } => {
            generate(
                shell,
                &mut Cli::command(),
                "theme-guard",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
