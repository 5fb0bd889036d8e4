use macroquad::prelude::*;
use crate::application::Command;

/// Panel button that issues a session command when clicked
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    command: Command,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>, command: Command) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            command,
        }
    }

    pub fn command(&self) -> Command {
        self.command
    }

    pub fn contains(&self, pos: (f32, f32)) -> bool {
        pos.0 >= self.x
            && pos.0 <= self.x + self.width
            && pos.1 >= self.y
            && pos.1 <= self.y + self.height
    }

    /// Draw with a lighter fill under the pointer
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.contains(mouse_pos) {
            Color::from_rgba(90, 90, 90, 255)
        } else {
            Color::from_rgba(50, 50, 50, 255)
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text_size = measure_text(&self.text, None, 20, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Left button went down over this button this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
