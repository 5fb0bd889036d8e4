use macroquad::prelude::*;
use crate::application::{Command, Session};
use crate::ui::{Button, grid_area_width};

/// Keys that map straight to a command. Escape is context dependent, see `escape_command`.
pub const KEY_BINDINGS: &[(KeyCode, Command)] = &[
    (KeyCode::Space, Command::ToggleRunning),
    (KeyCode::C, Command::Clear),
    (KeyCode::Right, Command::Step),
    (KeyCode::Up, Command::SpeedUp),
    (KeyCode::Down, Command::SlowDown),
    (KeyCode::T, Command::ResetSpeed),
    (KeyCode::R, Command::Randomize),
    (KeyCode::H, Command::ResetCamera),
    (KeyCode::N, Command::NextRule),
    (KeyCode::Key1, Command::SelectPattern(0)),
    (KeyCode::Key2, Command::SelectPattern(1)),
    (KeyCode::Key3, Command::SelectPattern(2)),
    (KeyCode::Key4, Command::SelectPattern(3)),
    (KeyCode::Key5, Command::SelectPattern(4)),
    (KeyCode::Key6, Command::SelectPattern(5)),
    (KeyCode::Key7, Command::SelectPattern(6)),
    (KeyCode::Key8, Command::SelectPattern(7)),
    (KeyCode::Key9, Command::SelectPattern(8)),
    (KeyCode::Key0, Command::SelectPattern(9)),
];

/// Escape backs out of pattern placement first, and clears the board otherwise
pub fn escape_command(placing: bool) -> Command {
    if placing { Command::CancelPlacement } else { Command::Clear }
}

/// Splits a left-button gesture into either a click or a pan.
///
/// A press only becomes a drag once the squared distance from the press point
/// reaches the threshold; after that every motion pans. Releasing without
/// having dragged is a click.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    threshold: f32,
    anchor: Option<(f32, f32)>,
    dragging: bool,
}

impl PointerTracker {
    pub fn new(threshold: f32) -> Self {
        Self { threshold, anchor: None, dragging: false }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn press(&mut self, pos: (f32, f32)) {
        self.anchor = Some(pos);
        self.dragging = false;
    }

    /// Pointer moved while held; returns the pan offset once dragging
    pub fn motion(&mut self, pos: (f32, f32)) -> Option<(f32, f32)> {
        let anchor = self.anchor?;
        let (dx, dy) = (pos.0 - anchor.0, pos.1 - anchor.1);
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        if self.dragging || dx * dx + dy * dy >= self.threshold {
            self.dragging = true;
            self.anchor = Some(pos);
            Some((dx, dy))
        } else {
            None
        }
    }

    /// Button released; returns the click position unless this gesture was a drag
    pub fn release(&mut self, pos: (f32, f32)) -> Option<(f32, f32)> {
        let pressed = self.anchor.take().is_some();
        let was_drag = std::mem::take(&mut self.dragging);
        (pressed && !was_drag).then_some(pos)
    }
}

/// Mouse wheel zooms around the viewport centre
pub fn handle_zoom(session: &mut Session) {
    let wheel = mouse_wheel().1;
    if wheel != 0.0 {
        let step = session.config().zoom_step;
        session.camera.zoom(wheel.signum() * step);
    }
}

/// Left button: click toggles/places, drag pans. Right button cancels placement.
pub fn handle_pointer(session: &mut Session, tracker: &mut PointerTracker, mouse_pos: (f32, f32)) {
    if is_mouse_button_pressed(MouseButton::Left) && mouse_pos.0 < grid_area_width() {
        tracker.press(mouse_pos);
    }
    if is_mouse_button_down(MouseButton::Left) {
        if let Some((dx, dy)) = tracker.motion(mouse_pos) {
            session.camera.pan(dx, dy);
        }
    }
    if is_mouse_button_released(MouseButton::Left) {
        if let Some((x, y)) = tracker.release(mouse_pos) {
            session.click(x, y);
        }
    }
    if is_mouse_button_pressed(MouseButton::Right) && session.pending_pattern.is_some() {
        session.apply(Command::CancelPlacement);
    }
}

/// Keyboard commands for this frame
pub fn process_keyboard_input(session: &mut Session) {
    if is_key_pressed(KeyCode::Escape) {
        let command = escape_command(session.pending_pattern.is_some());
        session.apply(command);
    }
    KEY_BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, command)| session.apply(*command));
}

/// Panel buttons clicked this frame
pub fn process_button_clicks(session: &mut Session, buttons: &[Button], mouse_pos: (f32, f32)) {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .for_each(|btn| session.apply(btn.command()));
}
