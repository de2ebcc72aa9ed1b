//! Triangle demo application
//!
//! Opens a 640x480 window with an OpenGL 4.1 core-profile context and draws
//! one vertex-colored triangle every frame until the window is closed.

use gl_engine::config::AppConfig;
use gl_engine::App;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting triangle demo");

    let config = AppConfig::default();

    let mut app = match App::new(&config) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Initialization failed: {}", e);
            std::process::exit(1);
        }
    };

    app.run();
}
