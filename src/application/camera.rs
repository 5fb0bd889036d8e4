use crate::domain::{Coord, Region};

/// Camera maps the infinite lattice onto the window.
/// Grid cell (0, 0) sits at the viewport centre plus the pan offset.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub pan_x: f32,
    pub pan_y: f32,
    /// Pixels per cell edge
    pub square_size: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    default_size: f32,
    min_size: f32,
    max_size: f32,
}

impl Camera {
    pub fn new(square_size: f32, min_size: f32, max_size: f32) -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            square_size,
            viewport_width: 0.0,
            viewport_height: 0.0,
            default_size: square_size,
            min_size,
            max_size,
        }
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    fn center(&self) -> (f32, f32) {
        (self.viewport_width / 2.0, self.viewport_height / 2.0)
    }

    /// Grow or shrink cells by `delta` pixels, within the zoom limits
    pub fn zoom(&mut self, delta: f32) {
        self.square_size = (self.square_size + delta).clamp(self.min_size, self.max_size);
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Cell under a screen pixel
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32) -> Coord {
        let (cx, cy) = self.center();
        Coord::new(
            ((screen_x - cx - self.pan_x) / self.square_size).floor() as i32,
            ((screen_y - cy - self.pan_y) / self.square_size).floor() as i32,
        )
    }

    /// Top-left pixel of a cell
    pub fn grid_to_screen(&self, coord: Coord) -> (f32, f32) {
        let (cx, cy) = self.center();
        (
            cx + self.pan_x + coord.x as f32 * self.square_size,
            cy + self.pan_y + coord.y as f32 * self.square_size,
        )
    }

    /// Every cell at least partly inside the viewport
    pub fn visible_region(&self) -> Region {
        Region::spanning(
            self.screen_to_grid(0.0, 0.0),
            self.screen_to_grid(self.viewport_width, self.viewport_height),
        )
    }

    /// Back to the origin at the configured cell size
    pub fn reset(&mut self) {
        self.pan_x = 0.0;
        self.pan_y = 0.0;
        self.square_size = self.default_size;
    }
}
