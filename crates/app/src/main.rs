mod frame_input;
mod ui_render;
mod ui_text;
mod window_config;

use std::path::Path;
use std::{env, fs, io, process};

use app::app_loop::{AppMode, AppState};
use app::camera::Camera;
use app::journal_file;
use app::launch_args::resolve_launch_args;
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use macroquad::prelude::*;
use macroquad::window::Conf;
use tactics_core::{Scenario, Session};
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(report) = run().await {
        eprintln!("{report:?}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let launch = resolve_launch_args(&args).map_err(|message| eyre!(message))?;
    let scenario = match &launch.scenario {
        Some(path) => load_scenario(path)?,
        None => Scenario::demo(),
    };
    let mut session = Session::from_scenario(&scenario).wrap_err("invalid scenario")?;
    info!(
        units = session.board().units().len(),
        hash = %app::format_snapshot_hash(session.snapshot_hash()),
        "session started"
    );

    let mut app_state = AppState::new(Camera::fit_width(screen_width()));
    loop {
        let input = frame_input::capture_frame_input();
        app_state.tick(&mut session, &input.keys_pressed, &input.keys_down);

        if app_state.journal_dirty
            && let Some(path) = &launch.record
            && let Err(err) = journal_file::write_atomic(session.journal(), path)
        {
            warn!(%err, path = %path.display(), "failed to write journal");
        }
        if app_state.mode == AppMode::Quit {
            break;
        }

        clear_background(BLACK);
        ui_render::draw_frame(&session, &app_state);
        next_frame().await
    }

    if let Some(path) = &launch.record {
        journal_file::write_atomic(session.journal(), path)
            .wrap_err_with(|| format!("writing journal to {}", path.display()))?;
        info!(inputs = session.journal().inputs.len(), path = %path.display(), "journal saved");
    }
    Ok(())
}

fn load_scenario(path: &Path) -> Result<Scenario> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("reading scenario {}", path.display()))?;
    Scenario::from_toml_str(&text).wrap_err_with(|| format!("parsing scenario {}", path.display()))
}
