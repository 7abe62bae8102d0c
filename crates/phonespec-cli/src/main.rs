//! PhoneSpec CLI
//!
//! Command-line front end for browsing a phone specification catalog

use clap::{Parser, Subcommand};

mod commands;
mod context;

use context::GlobalArgs;

#[derive(Debug, Parser)]
#[command(name = "phonespec")]
#[command(about = "PhoneSpec - Browse, filter and compare phone specifications", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the first devices in the catalog
    List,
    /// Search devices by model or brand name
    Search(commands::search::SearchArgs),
    /// Filter devices by brand, memory, battery, screen and features
    Filter(commands::filter::FilterArgs),
    /// Show every specification of one device
    Show(commands::show::ShowArgs),
    /// Compare two devices side by side
    Compare(commands::compare::CompareArgs),
    /// List distinct brand names
    Brands,
    /// List spec paths shared by every device
    Features,
    /// Clean a raw export into the dataset files
    Prepare(commands::prepare::PrepareArgs),
    /// Show dataset counts and fingerprint
    Stats,
    /// Show or change the color theme
    Theme(commands::theme::ThemeArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List => commands::list::execute(&cli.global),
        Commands::Search(args) => commands::search::execute(&cli.global, args),
        Commands::Filter(args) => commands::filter::execute(&cli.global, args),
        Commands::Show(args) => commands::show::execute(&cli.global, args),
        Commands::Compare(args) => commands::compare::execute(&cli.global, args),
        Commands::Brands => commands::brands::execute(&cli.global),
        Commands::Features => commands::features::execute(&cli.global),
        Commands::Prepare(args) => commands::prepare::execute(&cli.global, args),
        Commands::Stats => commands::stats::execute(&cli.global),
        Commands::Theme(args) => commands::theme::execute(&cli.global, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
