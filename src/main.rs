// STD library
use std::path::PathBuf;
use std::time::Instant;

// External crates
use anyhow::Result;

// Internal imports
use trirender::config::Config;
use trirender::renderer::{Renderer, Scene};
use trirender::screen::Presenter;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional JSON config as the only argument
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = Config::load_or_default(config_path.as_deref())?;
    log::info!(
        "{}x{} {:?} shading, mesh {}",
        config.window.width,
        config.window.height,
        config.render.shading,
        config.assets.mesh.display()
    );

    // Missing or broken assets abort startup
    let scene = Scene::load(&config)?;
    let renderer = Renderer::from_config(&config);

    run(&config, scene, renderer)
}

#[cfg(feature = "window")]
fn run(config: &Config, mut scene: Scene, mut renderer: Renderer) -> Result<()> {
    let mut presenter = trirender::window::RaylibPresenter::open(&config.window)?;

    let mut last_time = Instant::now();
    while !presenter.should_close() {
        let stats = renderer.render(&scene);
        presenter.present(renderer.surface())?;

        let frame_time = last_time.elapsed();
        last_time = Instant::now();
        log::debug!(
            "frame {:.2?}: {} of {} faces drawn, {} culled, {} pixels",
            frame_time,
            stats.drawn,
            stats.faces,
            stats.culled,
            stats.pixels
        );

        scene.model.yaw += config.render.spin;
    }
    Ok(())
}

#[cfg(not(feature = "window"))]
fn run(config: &Config, scene: Scene, mut renderer: Renderer) -> Result<()> {
    let frame_start = Instant::now();
    let stats = renderer.render(&scene);
    log::info!(
        "rendered in {:.2?}: {} of {} faces drawn, {} culled",
        frame_start.elapsed(),
        stats.drawn,
        stats.faces,
        stats.culled
    );

    let mut snapshot = trirender::screen::BmpSnapshot { path: config.render.snapshot.clone() };
    snapshot.present(renderer.surface())
}
