//! Command-line entry point for the `downpour` viewer.
//!
//! Launches the rainy parking-lot scene, optionally loading a scene manifest
//! passed as the first argument (falling back to `assets/scene.toml`).

use downpour::Viewer;

fn main() {
    env_logger::init();

    let mut builder = Viewer::builder();
    if let Some(path) = std::env::args().nth(1) {
        builder = builder.with_manifest(path);
    } else if std::path::Path::new("assets/scene.toml").exists() {
        builder = builder.with_manifest("assets/scene.toml");
    }

    if let Err(e) = builder.build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
