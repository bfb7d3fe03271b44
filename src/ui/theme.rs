//! Theme constants for the GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(209, 213, 219);
pub const CELL_BG: Color32 = Color32::WHITE;
pub const CELL_HOVER: Color32 = Color32::from_rgb(243, 244, 246);
pub const CELL_BORDER: Color32 = Color32::from_rgb(156, 163, 175);

// Marks
pub const MARK_X: Color32 = Color32::from_rgb(37, 99, 235);
pub const MARK_O: Color32 = Color32::from_rgb(220, 38, 38);

// Winning run
pub const WIN_CELL_BG: Color32 = Color32::from_rgb(187, 247, 208);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(34, 160, 80);

// Not const: unmultiplied colors go through a conversion
pub fn winning_hover() -> Color32 {
    Color32::from_rgba_unmultiplied(34, 160, 80, 110)
}

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(37, 99, 235);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const CELL_GAP: f32 = 8.0;
pub const MAX_CELL_SIZE: f32 = 96.0;
pub const MARK_FONT_RATIO: f32 = 0.5;
pub const WIN_STROKE_WIDTH: f32 = 4.0;
