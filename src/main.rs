//! Application entry point: parse arguments, set up logging, load the
//! dataset once, then hand everything to the dashboard shell.

#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use eframe::egui;

use collostruct::{Dataset, config, gui, logging};

#[derive(Parser)]
#[command(
    name = "collostruct",
    about = "Interactive browser for precomputed collostructional-analysis statistics"
)]
struct Cli {
    /// Path to the collostruction dataset (delimited file).
    #[arg(
        long,
        value_name = "FILE",
        default_value = "data/cnstr_shiny_sense_pred.csv"
    )]
    data: PathBuf,
}

fn main() -> Result<()> {
    logging::init()?;
    let cli = Cli::parse();

    let mut app_config = config::load_app_config();

    // A broken dataset is fatal: there is nothing to browse without it.
    let dataset = Dataset::load(&cli.data)?;
    app_config.settings.last_dataset = Some(cli.data.clone());
    app_config.log_event("Dataset Loaded", cli.data.display().to_string());
    if let Err(e) = config::save_app_config(&app_config) {
        tracing::warn!(error = %e, "failed to persist config");
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Collostruction Analysis",
        native_options,
        Box::new(move |cc| Ok(Box::new(gui::App::new(cc, dataset, app_config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to launch the dashboard: {e}"))?;

    Ok(())
}
