#[cfg(not(feature = "window"))]
mod fake_interaction;
mod screen;

use std::path::Path;

use anyhow::Context;
use screen::Screen;
use windmill_graphics::config::FAN_IMAGE_PATH;
use windmill_graphics::{EventSource, Scene};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut screen = Screen::new();

    log::info!("Loading media");
    let mut scene =
        Scene::load(&mut screen, Path::new(FAN_IMAGE_PATH)).context("Failed to load media")?;

    #[cfg(feature = "window")]
    screen::render_loop(&mut scene, &mut screen, |screen| screen.poll_events());

    #[cfg(not(feature = "window"))]
    {
        let mut script = fake_interaction::demo_script();
        log::info!(
            "No window support built in, running a {}-tick scripted demo",
            script.remaining()
        );
        screen::render_loop(&mut scene, &mut screen, |_| script.poll_events());
        log::info!(
            "Demo finished at {}% power, fan at {:.1}°",
            scene.regulator().power(),
            scene.fan().angle()
        );
        fake_interaction::save_snapshot(&screen, Path::new("windmill.png"))?;
    }

    Ok(())
}
