mod button;

pub use button::Button;

use macroquad::prelude::{screen_width, screen_height};
use crate::application::Command;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const WINDOW_WIDTH: i32 = 1200;
pub const WINDOW_HEIGHT: i32 = 800;

/// X position where the side panel starts
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Width of the board area left of the panel
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Panel buttons, top to bottom
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    [
        ("Play/Pause", Command::ToggleRunning),
        ("Step", Command::Step),
        ("Clear", Command::Clear),
        ("Random", Command::Randomize),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (label, command))| {
        let y = 20.0 + i as f32 * (BUTTON_HEIGHT + 10.0);
        Button::new(px + 10.0, y, PANEL_WIDTH - 20.0, BUTTON_HEIGHT, label, command)
    })
    .collect()
}
