//! GUI for the grid games
//!
//! Native immediate-mode GUI using egui/eframe. The UI only reads the
//! [`Game`](crate::game::Game) it owns and forwards clicks and resets to it.

mod app;
mod board_view;
mod theme;

pub use app::{status_text, GridGameApp};
