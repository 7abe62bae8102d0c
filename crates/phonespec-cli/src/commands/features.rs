//! Features command
//!
//! Usage: phonespec features

use crate::context::{open_session, print_json, CliResult, GlobalArgs};

/// Execute features command
pub fn execute(global: &GlobalArgs) -> CliResult {
    let session = open_session(global)?;
    let keys = session.common_features();

    if global.json {
        return print_json(&keys);
    }
    println!("Common features ({}):", keys.len());
    for key in keys {
        println!("{}", key);
    }
    Ok(())
}
