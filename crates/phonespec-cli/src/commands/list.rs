//! List command
//!
//! Usage: phonespec list

use phonespec_core::render::render_cards;

use crate::context::{open_session, print_json, CliResult, GlobalArgs};

/// Execute list command
pub fn execute(global: &GlobalArgs) -> CliResult {
    let session = open_session(global)?;
    let devices = session.list_initial();

    if global.json {
        print_json(&devices)
    } else {
        print!("{}", render_cards(&devices));
        Ok(())
    }
}
