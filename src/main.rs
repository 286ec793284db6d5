//! Checkers GUI
//!
//! Play checkers against the AI or against another player.

use std::io;

use anyhow::anyhow;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use checkers::config::Cli;
use checkers::ui::CheckersApp;
use checkers::GameConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = if cli.interactive {
        GameConfig::prompt(&mut io::stdin().lock(), &mut io::stdout())?
    } else {
        GameConfig::try_from(cli)?
    };
    info!(?config, "starting game");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([700.0, 520.0])
            .with_title("Checkers"),
        ..Default::default()
    };

    eframe::run_native(
        "Checkers",
        options,
        Box::new(move |cc| Ok(Box::new(CheckersApp::new(cc, config)))),
    )
    .map_err(|err| anyhow!("failed to start GUI: {err}"))
}
