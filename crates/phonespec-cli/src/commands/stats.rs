//! Stats command
//!
//! Usage: phonespec stats

use crate::context::{open_session, print_json, CliResult, GlobalArgs};

/// Execute stats command
pub fn execute(global: &GlobalArgs) -> CliResult {
    let session = open_session(global)?;
    let stats = session.stats();

    if global.json {
        return print_json(&stats);
    }
    println!("Brands: {}", stats.brand_count);
    println!("Devices: {}", stats.device_count);
    println!("Bytes: {}", stats.byte_len);
    println!("SHA256: {}", stats.digest.as_deref().unwrap_or("-"));
    Ok(())
}
