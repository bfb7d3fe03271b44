//! Grid games GUI
//!
//! Tic-tac-toe and connect five for two players sharing one screen.

use clap::Parser;
use gridgame::config::Cli;
use gridgame::ui::GridGameApp;
use tracing::info;

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.env_filter())
        .init();

    info!(variant = %cli.variant, "starting");

    let variant = cli.variant;
    eframe::run_native(
        "Grid Games",
        cli.native_options(),
        Box::new(move |cc| Ok(Box::new(GridGameApp::new(cc, variant)))),
    )
}
