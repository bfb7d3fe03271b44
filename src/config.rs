//! Command-line configuration

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::board::Variant;

/// Two-player grid games on one screen
#[derive(Parser, Debug, Clone)]
#[command(name = "gridgame")]
#[command(about = "Tic-tac-toe and connect five for two local players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board to start with
    #[arg(short = 'b', long, value_enum, default_value_t = Variant::Classic)]
    pub variant: Variant,

    /// Tracing filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_filter: String,

    /// Initial window width
    #[arg(long, default_value_t = 720.0)]
    pub width: f32,

    /// Initial window height
    #[arg(long, default_value_t = 560.0)]
    pub height: f32,
}

impl Cli {
    /// Log filter: `RUST_LOG` if set, otherwise `--log-filter`
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_filter))
    }

    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([self.width, self.height])
                .with_min_inner_size([480.0, 400.0])
                .with_title("Grid Games"),
            ..Default::default()
        }
    }
}
