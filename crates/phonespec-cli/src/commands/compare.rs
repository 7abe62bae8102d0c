//! Compare command
//!
//! Usage: phonespec compare <LEFT_ID> [RIGHT_ID] [--candidates <QUERY>]
//!
//! Pins LEFT_ID, optionally lists right-side candidates, and with RIGHT_ID
//! prints the comparison table.

use clap::Args;
use phonespec_core::errors::ExErrorKind;
use phonespec_core::render::{
    render_compare_candidates, render_comparison_table, render_pinned, NO_SELECTION_MESSAGE,
};
use phonespec_core::DeviceId;

use crate::context::{open_session, print_json, CliResult, GlobalArgs};

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Device to pin on the left
    pub left: String,

    /// Device to compare against
    pub right: Option<String>,

    /// List right-side candidates matching this text
    #[arg(long)]
    pub candidates: Option<String>,
}

/// Execute compare command
pub fn execute(global: &GlobalArgs, args: CompareArgs) -> CliResult {
    let mut session = open_session(global)?;
    session.pin_for_compare(&DeviceId::from_string(args.left));

    if let Some(query) = &args.candidates {
        let candidates = session.search_for_compare(query);
        if global.json {
            print_json(&candidates)?;
        } else {
            print!("{}", render_pinned(session.pinned()));
            print!("{}", render_compare_candidates(&candidates));
        }
    }

    let Some(right) = args.right else {
        if args.candidates.is_none() && !global.json {
            print!("{}", render_pinned(session.pinned()));
        }
        return Ok(());
    };

    match session.finalize_compare(&DeviceId::from_string(right)) {
        Ok(matrix) if global.json => print_json(&matrix),
        Ok(matrix) => {
            print!("{}", render_comparison_table(&matrix));
            Ok(())
        }
        Err(e) if e.kind() == ExErrorKind::IncompleteSelection => {
            println!("{}", NO_SELECTION_MESSAGE);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
