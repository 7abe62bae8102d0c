//! One module per subcommand

pub mod brands;
pub mod compare;
pub mod features;
pub mod filter;
pub mod list;
pub mod prepare;
pub mod search;
pub mod show;
pub mod stats;
pub mod theme;
