//! Shared setup for every command: configuration, logging, preferences and
//! the session with its dataset loaded.

use clap::Args;
use phonespec_core::logging_facility;
use phonespec_core::render::LOAD_ERROR_MESSAGE;
use phonespec_core::Theme;
use phonespec_engine::Session;
use phonespec_store::{CatalogConfig, Preferences};
use serde::Serialize;
use std::path::PathBuf;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Configuration file (default: ./phonespec.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset file, overriding the configured path
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Start in dark mode when no theme has been saved
    #[arg(long, global = true)]
    pub prefer_dark: bool,
}

/// Load configuration and start logging
pub fn init(global: &GlobalArgs) -> Result<CatalogConfig, Box<dyn std::error::Error>> {
    let mut config = CatalogConfig::load(global.config.as_deref())?;
    if let Some(data) = &global.data {
        config.dataset_path = data.clone();
    }
    logging_facility::init(config.log_profile);
    Ok(config)
}

/// The theme a session starts with
pub fn initial_theme(
    global: &GlobalArgs,
    config: &CatalogConfig,
) -> Result<Theme, Box<dyn std::error::Error>> {
    let prefs = Preferences::load(&config.preferences_path)?;
    Ok(Theme::initial(prefs.theme, global.prefer_dark))
}

/// Build a session and load its dataset
///
/// A failed load is reported with the static user message; details are in
/// the log.
pub fn open_session(global: &GlobalArgs) -> Result<Session, Box<dyn std::error::Error>> {
    let config = init(global)?;
    let theme = initial_theme(global, &config)?;
    let mut session = Session::new(config.filter_defaults, theme);
    if session.load(&config.dataset_path).is_err() {
        return Err(LOAD_ERROR_MESSAGE.into());
    }
    Ok(session)
}

/// Print `value` as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
