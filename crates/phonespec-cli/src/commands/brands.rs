//! Brands command
//!
//! Usage: phonespec brands

use crate::context::{open_session, print_json, CliResult, GlobalArgs};

/// Execute brands command
pub fn execute(global: &GlobalArgs) -> CliResult {
    let session = open_session(global)?;
    let brands = session.brand_names();

    if global.json {
        return print_json(&brands);
    }
    for brand in brands {
        println!("{}", brand);
    }
    Ok(())
}
