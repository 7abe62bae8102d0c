//! Search command
//!
//! Usage: phonespec search <QUERY>

use clap::Args;
use phonespec_core::render::render_cards;

use crate::context::{open_session, print_json, CliResult, GlobalArgs};

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Case-insensitive text matched against model and brand names
    #[arg(default_value = "")]
    pub query: String,
}

/// Execute search command
pub fn execute(global: &GlobalArgs, args: SearchArgs) -> CliResult {
    let session = open_session(global)?;
    let devices = session.search(&args.query);

    if global.json {
        print_json(&devices)
    } else {
        print!("{}", render_cards(&devices));
        Ok(())
    }
}
