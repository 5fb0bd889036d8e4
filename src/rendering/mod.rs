use macroquad::prelude::*;
use crate::application::{Camera, Session};
use crate::domain::{LifeEngine, Pattern};
use crate::ui::{Button, panel_x, grid_area_width, grid_area_height, PANEL_WIDTH};

const ALIVE_COLOR: Color = WHITE;
const GRID_LINE_COLOR: Color = Color::new(0.25, 0.25, 0.25, 1.0);
/// Below this cell size grid lines would swamp the board
const MIN_GRID_LINE_SIZE: f32 = 8.0;

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Grid lines anchored on the origin cell, stepping outwards in both directions
pub fn draw_grid_lines(camera: &Camera) {
    let size = camera.square_size;
    if size < MIN_GRID_LINE_SIZE {
        return;
    }
    let width = grid_area_width();
    let height = grid_area_height();
    let (origin_x, origin_y) = camera.grid_to_screen(crate::domain::Coord::ORIGIN);

    let mut x = origin_x.rem_euclid(size);
    while x <= width {
        draw_line(x, 0.0, x, height, 1.0, GRID_LINE_COLOR);
        x += size;
    }
    let mut y = origin_y.rem_euclid(size);
    while y <= height {
        draw_line(0.0, y, width, y, 1.0, GRID_LINE_COLOR);
        y += size;
    }
}

/// Every live cell inside the viewport
pub fn draw_cells(engine: &LifeEngine, camera: &Camera) {
    let region = camera.visible_region();
    // Leave a one pixel gap so grid lines stay visible between neighbors
    let inset = if camera.square_size >= MIN_GRID_LINE_SIZE { 1.0 } else { 0.0 };
    let size = camera.square_size - inset * 2.0;

    engine
        .live_cells()
        .iter()
        .filter(|coord| region.contains(**coord))
        .for_each(|&coord| {
            let (x, y) = camera.grid_to_screen(coord);
            draw_rectangle(x + inset, y + inset, size, size, ALIVE_COLOR);
        });
}

/// Ghost of the armed pattern, centred on the cell under the cursor
pub fn draw_pattern_preview(pattern: &Pattern, camera: &Camera, mouse_pos: (f32, f32)) {
    let size = camera.square_size;
    let center = camera.screen_to_grid(mouse_pos.0, mouse_pos.1);
    let origin = pattern.origin_centered_on(center);

    for coord in pattern.cells_at(origin) {
        let (x, y) = camera.grid_to_screen(coord);
        draw_rectangle(x, y, size, size, Color::from_rgba(0, 255, 150, 120));
    }

    let (box_x, box_y) = camera.grid_to_screen(origin);
    draw_rectangle_lines(
        box_x,
        box_y,
        pattern.width as f32 * size,
        pattern.height as f32 * size,
        2.0,
        Color::from_rgba(255, 255, 0, 180),
    );
}

/// Side panel: buttons, status and key help
pub fn draw_controls(session: &Session, buttons: &[Button], mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let tx = px + 10.0;
    let running = session.scheduler.is_running();
    let rule = session.engine.rule();

    let labels = [
        ("Status:".to_string(), 220.0, 16.0, WHITE),
        (
            if running { "Running" } else { "Paused" }.to_string(),
            238.0,
            16.0,
            if running { GREEN } else { ORANGE },
        ),
        (format!("Speed: {} gen/s", session.scheduler.generations_per_second()), 262.0, 14.0, LIGHTGRAY),
        (format!("Generation: {}", session.generation()), 280.0, 14.0, LIGHTGRAY),
        (format!("Population: {}", format_number(session.engine.population())), 298.0, 14.0, LIGHTGRAY),
        (format!("Step: {:.2} ms", session.last_step_time_ms), 316.0, 14.0, LIGHTGRAY),
        (format!("Rule: {}", rule.name()), 340.0, 14.0, WHITE),
        (rule.description().to_string(), 356.0, 12.0, GRAY),
        (format!("Plane: {}", session.engine.accounting().name()), 374.0, 12.0, GRAY),
        (format!("Cell: {:.0}px", session.camera.square_size), 390.0, 12.0, GRAY),
    ];
    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, tx, *y, *size, *color);
    });

    let help = [
        "Space: Play/Pause",
        "Right: Step",
        "Up/Down: Speed",
        "T: Reset speed",
        "R: Randomize",
        "Esc/C: Clear",
        "N: Next rule",
        "H: Home camera",
        "1-0: Patterns",
        "Click: Toggle cell",
        "Drag: Pan  Wheel: Zoom",
    ];
    help.iter().enumerate().for_each(|(i, line)| {
        draw_text(line, tx, 430.0 + i as f32 * 15.0, 12.0, GRAY);
    });

    if let Some(pattern) = session.pending() {
        draw_text(&format!("Placing: {}", pattern.name), tx, 610.0, 14.0, YELLOW);
        draw_text(pattern.description, tx, 626.0, 12.0, GRAY);
        draw_text("RMB/Esc: cancel", tx, 642.0, 12.0, GRAY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_500), "1.5K");
        assert_eq!(format_number(2_000_000), "2.0M");
    }
}
