//! Window sized in whole cells so the starting zoom is an integer scale.

use app::APP_NAME;
use app::camera::{CELLS_ACROSS, TILE_SIZE};
use macroquad::window::Conf;

/// Pixels per tile pixel at the starting zoom.
const START_SCALE: f32 = 3.0;
const CELLS_DOWN: f32 = 12.0;

fn window_extent(cells: f32) -> i32 {
    (cells * TILE_SIZE * START_SCALE) as i32
}

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: window_extent(CELLS_ACROSS),
        window_height: window_extent(CELLS_DOWN),
        // The camera scale is fitted once, at startup.
        window_resizable: false,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app::camera::Camera;

    #[test]
    fn window_fits_whole_cells_at_start_scale() {
        let conf = build_window_conf();
        assert_eq!((conf.window_width, conf.window_height), (768, 576));
        assert_eq!(Camera::fit_width(conf.window_width as f32).scale, START_SCALE);
    }

    #[test]
    fn window_is_titled_and_fixed_size() {
        let conf = build_window_conf();
        assert_eq!(conf.window_title, APP_NAME);
        assert!(!conf.window_resizable);
    }
}
