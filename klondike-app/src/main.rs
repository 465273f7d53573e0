#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

mod app;
mod painter;

use crate::app::KlondikeApp;

use clap::Parser;
use klondike_common::layout::DEFAULT_WINDOW_SIZE;
use tracing_subscriber::{EnvFilter, prelude::*};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Initial window width
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_WINDOW_SIZE.x)]
    width: f32,
    /// Initial window height
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_WINDOW_SIZE.y)]
    height: f32,
    /// Shuffle seed, to replay the same deal
    #[arg(short, long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([cli.width, cli.height])
            .with_resizable(true),
        ..Default::default()
    };

    let app = KlondikeApp::new(cli.seed);

    eframe::run_native(
        "Klondike Solitaire",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app; {e}"))?;

    Ok(())
}

fn init_logging() {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(stderr_layer)
        .init();
}
