//! Theme constants for the checkers GUI

use egui::Color32;

// Board squares
pub const LIGHT_SQUARE: Color32 = Color32::from_rgb(255, 255, 255);
pub const DARK_SQUARE: Color32 = Color32::from_rgb(0, 0, 0);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(60, 62, 66);

// Pieces
pub const RED_PIECE: Color32 = Color32::from_rgb(255, 0, 0);
pub const BLUE_PIECE: Color32 = Color32::from_rgb(0, 0, 255);
pub const RED_KING: Color32 = Color32::from_rgb(200, 0, 0);
pub const BLUE_KING: Color32 = Color32::from_rgb(0, 0, 200);
pub const CROWN_RING: Color32 = Color32::from_rgb(255, 215, 0);

// Markers
pub const SELECTED_RING: Color32 = Color32::from_rgb(80, 220, 120);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 180, 50);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn target_marker() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 220, 120, 140)
}

pub fn shadow() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 0, 60)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 10.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.4;
pub const CROWN_RADIUS_RATIO: f32 = 0.22;
pub const TARGET_RADIUS_RATIO: f32 = 0.15;
pub const MARKER_WIDTH: f32 = 3.0;
