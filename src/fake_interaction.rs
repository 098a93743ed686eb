//! Headless stand-in for a person at the keyboard.

use std::path::Path;

use anyhow::Context;
use embedded_graphics_simulator::OutputSettingsBuilder;
use windmill_graphics::{InputEvent, Key, ScriptedInput};

use crate::screen::Screen;

const UP: InputEvent = InputEvent::KeyDown(Key::Up);
const DOWN: InputEvent = InputEvent::KeyDown(Key::Down);

/// Winds the dial up past its end stop, lets the fan spin, backs off in
/// uneven steps, then quits.
pub fn demo_script() -> ScriptedInput {
    let mut script = ScriptedInput::default()
        .repeat(30, &[UP])
        .repeat(240, &[]);
    // Held key: a burst of repeats every fourth tick.
    for _ in 0..5 {
        script = script.repeat(1, &[DOWN, DOWN, DOWN]).repeat(3, &[]);
    }
    script.repeat(1, &[UP, DOWN, DOWN]).repeat(120, &[])
}

pub fn save_snapshot(screen: &Screen, path: &Path) -> anyhow::Result<()> {
    screen
        .display()
        .to_rgb_output_image(&OutputSettingsBuilder::new().build())
        .save_png(path)
        .with_context(|| format!("Failed to save snapshot to {}", path.display()))?;
    log::info!("Saved final frame to {}", path.display());
    Ok(())
}
