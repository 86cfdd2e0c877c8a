//! View transform from grid coordinates to screen pixels.

use tactics_core::Pos;

pub const TILE_SIZE: f32 = 16.0;
/// Cells panned per frame while an arrow key is held.
pub const PAN_STEP: f32 = 0.25;
pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 8.0;
/// Cells visible across the window at the starting zoom.
pub const CELLS_ACROSS: f32 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Top-left corner of the view, in cells.
    pub x0: f32,
    pub y0: f32,
    pub scale: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self { x0: 0.0, y0: 0.0, scale: 2.0 }
    }
}

impl Camera {
    /// Starting zoom that shows a fixed number of cells across the window.
    pub fn fit_width(screen_width: f32) -> Self {
        let scale = (screen_width / TILE_SIZE / CELLS_ACROSS).clamp(MIN_SCALE, MAX_SCALE);
        Self { scale, ..Self::default() }
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.x0 += dx * PAN_STEP;
        self.y0 += dy * PAN_STEP;
    }

    pub fn zoom_in(&mut self) {
        self.scale = (self.scale * 2.0).min(MAX_SCALE);
    }

    pub fn zoom_out(&mut self) {
        self.scale = (self.scale * 0.5).max(MIN_SCALE);
    }

    pub fn cell_size(&self) -> f32 {
        TILE_SIZE * self.scale
    }

    /// Screen position of a cell's top-left corner.
    pub fn cell_origin(&self, pos: Pos) -> (f32, f32) {
        let size = self.cell_size();
        ((pos.x as f32 - self.x0) * size, (pos.y as f32 - self.y0) * size)
    }
}
