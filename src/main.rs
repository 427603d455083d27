//! Terminal UI (TUI) viewer for tabular data files
//!
//! Renders a CSV, TSV, or JSON file as a scrollable grid and re-reads the
//! file on a fixed cadence, so changes on disk appear without restarting
//! the viewer. Navigation is Vim-style.
//!
//! # Examples
//!
//! ```bash
//! # show help menu
//! tabwatch --help
//!
//! # watch a csv file, refreshing every second
//! tabwatch data.csv
//!
//! # watch a json file, refreshing every five seconds
//! tabwatch --interval 5s data.json
//! ```

use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use directories::ProjectDirs;
use std::{
    fs,
    path::PathBuf,
    sync::{Arc, mpsc},
};

use crate::{
    config::{Config, ConfigManager},
    refresh::RefreshScheduler,
    source::{DataSource, TableSnapshot, source_for_path},
    ui::{
        colors::{Colors, Theme},
        store::{
            Dispatcher, Store,
            reducer::StoreReducer,
            state::{Cursor, State},
        },
    },
};

#[doc(hidden)]
mod config;
#[doc(hidden)]
mod error;
#[doc(hidden)]
mod refresh;
#[doc(hidden)]
mod source;
#[doc(hidden)]
mod ui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the data file to watch (csv, tsv, or json)
    file: PathBuf,

    /// How often to re-read the data file, e.g. 500ms, 2s
    #[arg(short, long)]
    interval: Option<String>,

    /// Color theme (blue, emerald, indigo, red)
    #[arg(short, long)]
    theme: Option<String>,

    /// Write debug logs to tabwatch.log
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

#[doc(hidden)]
fn initialize_logger(args: &Args) -> Result<()> {
    if args.debug {
        // logs go to a file so they never corrupt the grid display
        let log_file = fs::File::create("tabwatch.log")?;
        simplelog::WriteLogger::init(
            simplelog::LevelFilter::Debug,
            simplelog::Config::default(),
            log_file,
        )?;
    } else {
        simplelog::TermLogger::init(
            simplelog::LevelFilter::Off,
            simplelog::Config::default(),
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        )?;
    }

    Ok(())
}

#[doc(hidden)]
fn get_project_config_path() -> Result<String> {
    let project_dir = ProjectDirs::from("", "", "tabwatch")
        .ok_or(eyre!("failed to get project directory"))?;
    let config_dir = project_dir.config_dir();
    fs::create_dir_all(config_dir)?;
    let config_file_path = config_dir
        .join("config.yml")
        .to_str()
        .ok_or(eyre!("unable to construct config file path"))?
        .to_string();
    Ok(config_file_path)
}

#[doc(hidden)]
fn load_config(args: &Args) -> Result<Config> {
    let config_path = get_project_config_path()?;
    let manager = ConfigManager::builder().path(config_path).build()?;

    let mut config = manager.get();

    if let Some(interval) = &args.interval {
        config.refresh_interval = interval.clone();
    }

    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }

    Ok(config)
}

#[doc(hidden)]
fn initial_state(
    config: &Config,
    source: &dyn DataSource,
    snapshot: TableSnapshot,
) -> State {
    let true_color_enabled =
        match supports_color::on(supports_color::Stream::Stdout) {
            Some(support) => support.has_16m,
            _ => false,
        };

    let theme = Theme::from_string(&config.theme);
    let colors =
        Colors::new(theme.to_palette(true_color_enabled), true_color_enabled);

    State {
        true_color_enabled,
        source_name: source.name(),
        refresh_interval: config.refresh_interval.clone(),
        snapshot,
        cursor: Cursor::default(),
        message: None,
        colors,
    }
}

#[doc(hidden)]
fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(&args)?;

    let config = load_config(&args)?;
    let interval = config.interval()?;

    let source = source_for_path(&args.file)?;

    // the first snapshot is the one startup failure that is fatal; after
    // this point a failed read only surfaces in the footer
    let snapshot = TableSnapshot::from_source(source.as_ref()).wrap_err(
        format!("failed to load initial data from {}", args.file.display()),
    )?;

    let state = initial_state(&config, source.as_ref(), snapshot);
    let store = Arc::new(Store::new(state, StoreReducer::boxed()));

    let (exit_tx, exit_rx) = mpsc::channel();

    let scheduler = RefreshScheduler::builder()
        .interval(interval)
        .source(source)
        .dispatcher(Arc::clone(&store) as Arc<dyn Dispatcher>)
        .exit(exit_rx)
        .build()?;

    let refresh_handle = scheduler.start();

    let app = ui::app::create_app(Arc::clone(&store))?;
    let res = app.launch();

    // interrupt the refresh thread's wait so shutdown doesn't sit out a
    // full interval
    drop(exit_tx);

    refresh_handle
        .join()
        .map_err(error::report_from_thread_panic)??;

    res
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
