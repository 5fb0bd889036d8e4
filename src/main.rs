use macroquad::prelude::*;
use tracing::{info, warn};
use infinite_life::{
    LifeConfig, Session,
    input::{self, PointerTracker},
    rendering,
    ui::{self, WINDOW_HEIGHT, WINDOW_WIDTH},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Infinite Life".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Config file if one is present and valid, defaults otherwise
fn load_config() -> LifeConfig {
    let Some(path) = LifeConfig::discover_path() else {
        return LifeConfig::default();
    };
    match LifeConfig::load(&path) {
        Ok(config) => {
            info!(path = %path.display(), "loaded config");
            config
        }
        Err(err) => {
            warn!(%err, "falling back to default config");
            LifeConfig::default()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    let mut session = Session::new(load_config());
    let mut pointer = PointerTracker::new(session.config().drag_threshold);
    info!(accounting = session.engine.accounting().name(), "starting Infinite Life");

    loop {
        let mouse_pos = mouse_position();
        session.camera.set_viewport(ui::grid_area_width(), ui::grid_area_height());

        // Rebuilt each frame so the panel follows window resizes
        let buttons = ui::create_buttons();

        input::process_button_clicks(&mut session, &buttons, mouse_pos);
        input::handle_zoom(&mut session);
        input::handle_pointer(&mut session, &mut pointer, mouse_pos);
        input::process_keyboard_input(&mut session);

        session.update(get_frame_time());

        clear_background(BLACK);
        rendering::draw_grid_lines(&session.camera);
        rendering::draw_cells(&session.engine, &session.camera);
        if let Some(pattern) = session.pending() {
            if mouse_pos.0 < ui::grid_area_width() {
                rendering::draw_pattern_preview(pattern, &session.camera, mouse_pos);
            }
        }
        rendering::draw_controls(&session, &buttons, mouse_pos);

        next_frame().await;
    }
}
