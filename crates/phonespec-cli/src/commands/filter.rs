//! Filter command
//!
//! Usage: phonespec filter [--brand <NAME>] [--min-ram <GB>] [--min-storage <GB>]
//!        [--min-battery <MAH>] [--min-screen <INCHES>] [--5g] [--nfc] [--jack]

use clap::Args;
use phonespec_core::render::render_cards;
use phonespec_core::FilterSpec;

use crate::context::{open_session, print_json, CliResult, GlobalArgs};

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Exact brand name
    #[arg(long)]
    pub brand: Option<String>,

    /// Minimum RAM in GB
    #[arg(long, default_value_t = 0)]
    pub min_ram: u32,

    /// Minimum storage in GB
    #[arg(long, default_value_t = 0)]
    pub min_storage: u32,

    /// Minimum battery capacity in mAh (default from configuration)
    #[arg(long)]
    pub min_battery: Option<u32>,

    /// Minimum screen diagonal in inches (default from configuration)
    #[arg(long)]
    pub min_screen: Option<f64>,

    /// Only devices with 5G bands
    #[arg(long = "5g")]
    pub need_5g: bool,

    /// Only devices with NFC
    #[arg(long = "nfc")]
    pub need_nfc: bool,

    /// Only devices with a 3.5mm headphone jack
    #[arg(long = "jack")]
    pub need_headphone_jack: bool,
}

impl FilterArgs {
    fn into_spec(self, defaults: FilterSpec) -> FilterSpec {
        FilterSpec {
            brand: self.brand,
            min_ram: self.min_ram,
            min_storage: self.min_storage,
            min_battery: self.min_battery.unwrap_or(defaults.min_battery),
            min_screen: self.min_screen.unwrap_or(defaults.min_screen),
            need_5g: self.need_5g,
            need_nfc: self.need_nfc,
            need_headphone_jack: self.need_headphone_jack,
        }
    }
}

/// Execute filter command
pub fn execute(global: &GlobalArgs, args: FilterArgs) -> CliResult {
    let session = open_session(global)?;
    let spec = args.into_spec(session.default_filter());
    let devices = session.filter(&spec)?;

    if global.json {
        print_json(&devices)
    } else {
        print!("{}", render_cards(&devices));
        Ok(())
    }
}
