use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use clap::Parser;
use client_core::{config::normalize_service_url, load_settings, ClientSettings};
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;
use ui::{GraderApp, StartupConfig};

const APP_TITLE: &str = "स्कोर.ai Essay Grader";

#[derive(Parser, Debug)]
#[command(about = "Desktop client for the essay grading service")]
struct Args {
    /// Base URL of the grading service, e.g. http://localhost:8000
    #[arg(long)]
    service_url: Option<String>,
    #[arg(long)]
    request_timeout_secs: Option<u64>,
    /// TTF/OTF font with Devanagari glyphs, tried before the system defaults.
    #[arg(long)]
    font: Option<PathBuf>,
}

fn resolve_settings(args: &Args) -> ClientSettings {
    let mut settings = match load_settings() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!("ignoring invalid client settings, using defaults: {err:#}");
            ClientSettings::default()
        }
    };

    if let Some(url) = &args.service_url {
        match normalize_service_url(url) {
            Ok(url) => settings.service_url = url,
            Err(err) => tracing::warn!("ignoring --service-url: {err:#}"),
        }
    }
    if let Some(secs) = args.request_timeout_secs.filter(|secs| *secs > 0) {
        settings.request_timeout_secs = secs;
    }
    settings
}

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let settings = resolve_settings(&args);
    tracing::info!(
        service_url = %settings.service_url,
        request_timeout_secs = settings.request_timeout_secs,
        "starting essay grader"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings);

    let startup = StartupConfig {
        font_path: args.font,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1100.0, 820.0])
            .with_min_inner_size([720.0, 560.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(GraderApp::bootstrap(cc, cmd_tx, ui_rx, startup)))),
    )
}
