//! On Call Runbook - DevOps troubleshooting guide
//!
//! A desktop browser for Helm, Kubernetes, Terraform, ArgoCD and GitOps runbooks,
//! with section search and editable Helm chart templates.

mod app;
mod core;
mod ui;

use app::RunbookApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::config::AppConfig;

const APP_ID: &str = "oncall-runbook";
const APP_TITLE: &str = "On Call Runbook";

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting {} v{}", APP_TITLE, env!("CARGO_PKG_VERSION"));

    // Preferences are read once here; the session itself is never persisted
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Using default config: {:#}", e);
        AppConfig::default()
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_title(format!("{} v{}", APP_TITLE, env!("CARGO_PKG_VERSION")))
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 540.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_ID,
        native_options,
        Box::new(move |cc| Ok(Box::new(RunbookApp::new(cc, config)))),
    )
}
