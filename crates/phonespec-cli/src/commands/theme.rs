//! Theme command
//!
//! Usage: phonespec theme [show|toggle|set <light|dark>]

use clap::{Args, Subcommand};
use phonespec_core::Theme;
use phonespec_engine::Session;
use phonespec_store::Preferences;

use crate::context::{init, initial_theme, CliResult, GlobalArgs};

#[derive(Debug, Args)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub command: Option<ThemeCommand>,
}

#[derive(Debug, Subcommand)]
pub enum ThemeCommand {
    /// Print the active theme (default)
    Show,
    /// Switch between light and dark and save the choice
    Toggle,
    /// Save an explicit theme
    Set {
        /// light or dark
        theme: Theme,
    },
}

/// Execute theme command
pub fn execute(global: &GlobalArgs, args: ThemeArgs) -> CliResult {
    let config = init(global)?;
    let mut session = Session::new(config.filter_defaults, initial_theme(global, &config)?);

    let next = match args.command.unwrap_or(ThemeCommand::Show) {
        ThemeCommand::Show => {
            println!("{}", session.theme());
            return Ok(());
        }
        ThemeCommand::Toggle => session.toggle_theme(),
        ThemeCommand::Set { theme } => theme,
    };

    Preferences { theme: Some(next) }.save(&config.preferences_path)?;
    println!("{}", next);
    Ok(())
}
