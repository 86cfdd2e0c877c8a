//! Rendering for the battlefield and the debug HUD.

use std::collections::BTreeSet;

use crate::ui_text::hud_lines;
use app::app_loop::AppState;
use app::camera::Camera;
use macroquad::prelude::*;
use tactics_core::{FrameView, Grid, Job, Pos, Session, TerrainKind, TurnState};

const GRID_LINE_COLOR: Color = Color { r: 0.25, g: 0.25, b: 0.25, a: 1.0 };
const OPEN_COLOR: Color = Color { r: 0.12, g: 0.16, b: 0.12, a: 1.0 };
const BLOCKING_COLOR: Color = Color { r: 0.35, g: 0.3, b: 0.25, a: 1.0 };
const LEGAL_COLOR: Color = Color { r: 0.2, g: 0.3, b: 0.6, a: 1.0 };
const HUD_FONT_SIZE: f32 = 16.0;
const HUD_LINE_STEP: f32 = 16.0;

pub fn draw_frame(session: &Session, app_state: &AppState) {
    let frame = session.frame();
    let camera = &app_state.camera;
    draw_grid(session.board().grid(), &frame, camera);
    draw_units(&frame, camera);
    draw_cursor(&frame, camera);
    draw_hud(session, app_state);
}

fn draw_grid(grid: &Grid, frame: &FrameView, camera: &Camera) {
    let legal: BTreeSet<Pos> = frame.legal_positions.iter().copied().collect();
    let size = camera.cell_size();
    for cell in grid.cells() {
        let (x, y) = camera.cell_origin(cell.pos);
        draw_rectangle(x, y, size, size, cell_fill(cell.terrain, legal.contains(&cell.pos)));
        draw_rectangle_lines(x, y, size, size, 1.0, GRID_LINE_COLOR);
    }
}

fn draw_units(frame: &FrameView, camera: &Camera) {
    let size = camera.cell_size();
    for unit in &frame.units {
        let (x, y) = camera.cell_origin(unit.pos);
        let (glyph, color) = job_glyph_and_color(unit.job);
        let color = if frame.selected_unit == Some(unit.id) { YELLOW } else { color };
        draw_text(glyph, x + size * 0.25, y + size * 0.8, size, color);
    }
}

fn draw_cursor(frame: &FrameView, camera: &Camera) {
    let size = camera.cell_size();
    let (x, y) = camera.cell_origin(frame.cursor);
    draw_rectangle_lines(x, y, size, size, 2.0, cursor_color(frame.turn_state));
}

fn draw_hud(session: &Session, app_state: &AppState) {
    for (index, line) in hud_lines(session, app_state).iter().enumerate() {
        draw_text(line, 4.0, HUD_FONT_SIZE + index as f32 * HUD_LINE_STEP, HUD_FONT_SIZE, WHITE);
    }
}

fn cell_fill(terrain: TerrainKind, legal: bool) -> Color {
    match (terrain, legal) {
        (_, true) => LEGAL_COLOR,
        (TerrainKind::Open, false) => OPEN_COLOR,
        (TerrainKind::Blocking, false) => BLOCKING_COLOR,
    }
}

fn cursor_color(state: TurnState) -> Color {
    match state {
        TurnState::SelectUnit => GREEN,
        TurnState::UnitMovement => BLUE,
        TurnState::UnitActions => RED,
    }
}

fn job_glyph_and_color(job: Job) -> (&'static str, Color) {
    match job {
        Job::Smallfolk => ("s", LIGHTGRAY),
        Job::Noble => ("N", GOLD),
    }
}
