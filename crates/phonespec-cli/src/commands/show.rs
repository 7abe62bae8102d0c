//! Show command
//!
//! Usage: phonespec show <DEVICE_ID>

use clap::Args;
use phonespec_core::render::render_device_detail;
use phonespec_core::DeviceId;

use crate::context::{open_session, print_json, CliResult, GlobalArgs};

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Device id as printed by list/search (e.g. Samsung_Galaxy-S24)
    pub device_id: String,
}

/// Execute show command
pub fn execute(global: &GlobalArgs, args: ShowArgs) -> CliResult {
    let session = open_session(global)?;
    let device = session.device(&DeviceId::from_string(args.device_id))?;

    if global.json {
        print_json(&device)
    } else {
        print!("{}", render_device_detail(device));
        Ok(())
    }
}
