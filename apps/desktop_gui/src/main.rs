use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use gallery_core::{GalleryController, SystemClipboard};
use shared::config::load_settings;
use tracing_subscriber::EnvFilter;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::{ChannelNotifier, UiEvent};
use ui::{DesktopGuiApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(name = "initmd-desktop", about = "init.md explainer and template gallery")]
struct Args {
    /// TOML catalog to show instead of the built-in templates.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Tab to open on: overview, context, templates, guide.
    #[arg(long)]
    tab: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = load_settings().context("failed to load settings")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .init();

    let startup = StartupConfig::resolve(args.catalog, args.tab.as_deref(), &settings)?;
    let catalog = startup.load_catalog()?;
    tracing::info!(templates = catalog.len(), "starting desktop gui");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    let gallery = GalleryController::new(
        catalog,
        SystemClipboard::new(),
        ChannelNotifier::new(ui_tx.clone()),
    );
    backend_bridge::runtime::launch(cmd_rx, gallery.clone(), ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("init.md")
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "init.md",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(DesktopGuiApp::new(
                gallery,
                cmd_tx,
                ui_rx,
                startup.start_tab,
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("desktop gui exited with error: {err}"))
}
