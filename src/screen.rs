use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::SimulatorDisplay;
#[cfg(feature = "window")]
use embedded_graphics_simulator::{sdl2::Keycode, OutputSettingsBuilder, SimulatorEvent, Window};
use windmill_graphics::color::BACKGROUND;
#[cfg(feature = "window")]
use windmill_graphics::config::{FRAME_TIME, WINDOW_TITLE};
use windmill_graphics::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
#[cfg(feature = "window")]
use windmill_graphics::{EventSource, Key};
use windmill_graphics::{Backend, InputEvent, Scene};

/// The screen framebuffer, shown in a desktop window when one is available.
pub struct Screen {
    display: SimulatorDisplay<Rgb888>,
    #[cfg(feature = "window")]
    window: Window,
    clock: FrameClock,
}

impl Screen {
    pub fn new() -> Self {
        log::info!("Creating {SCREEN_WIDTH}x{SCREEN_HEIGHT} screen");
        let mut display = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        display
            .clear(BACKGROUND)
            .unwrap_or_else(|never| match never {});

        #[cfg(feature = "window")]
        let window = {
            let mut window = Window::new(WINDOW_TITLE, &OutputSettingsBuilder::new().build());
            // Events can only be polled once the window has been shown.
            window.update(&display);
            window
        };

        Self {
            display,
            #[cfg(feature = "window")]
            window,
            clock: FrameClock::new(),
        }
    }

    /// Time spent on the last frame before it was presented, pacing excluded.
    pub fn busy(&self) -> Duration {
        self.clock.busy()
    }

    #[cfg(not(feature = "window"))]
    pub fn display(&self) -> &SimulatorDisplay<Rgb888> {
        &self.display
    }
}

impl Backend for Screen {
    type Screen = SimulatorDisplay<Rgb888>;

    fn screen(&mut self) -> &mut Self::Screen {
        &mut self.display
    }

    /// Headless, frames are only composed into the framebuffer.
    fn present(&mut self) {
        self.clock.composed();

        #[cfg(feature = "window")]
        {
            self.window.update(&self.display);

            // No vsync in the simulator window; hold every frame to FRAME_TIME instead.
            if let Some(rest) = FRAME_TIME.checked_sub(self.clock.elapsed()) {
                std::thread::sleep(rest);
            }
        }

        self.clock.restart();
    }
}

/// Measures how long a frame took to poll and compose, apart from the wait
/// for its frame slot.
struct FrameClock {
    started: Instant,
    busy: Duration,
}

impl FrameClock {
    fn new() -> Self {
        Self {
            started: Instant::now(),
            busy: Duration::ZERO,
        }
    }

    fn composed(&mut self) {
        self.busy = self.started.elapsed();
    }

    #[cfg(feature = "window")]
    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    fn restart(&mut self) {
        self.started = Instant::now();
    }

    fn busy(&self) -> Duration {
        self.busy
    }
}

#[cfg(feature = "window")]
impl EventSource for Screen {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.window
            .events()
            .map(|event| match event {
                SimulatorEvent::Quit => InputEvent::Quit,
                SimulatorEvent::KeyDown { keycode, .. } => InputEvent::KeyDown(key(keycode)),
                _ => InputEvent::Other,
            })
            .collect()
    }
}

// Matched by name: the keycode type differs between sdl2 releases.
#[cfg(feature = "window")]
fn key(keycode: Keycode) -> Key {
    match keycode.name().as_str() {
        "Up" => Key::Up,
        "Down" => Key::Down,
        _ => Key::Other,
    }
}

/// Ticks the scene until a Quit event comes back from it.
pub fn render_loop<F>(scene: &mut Scene, screen: &mut Screen, mut poll_events: F)
where
    F: FnMut(&mut Screen) -> Vec<InputEvent>,
{
    log::info!("Starting render loop");
    let mut timings = Vec::with_capacity(100);
    loop {
        let events = poll_events(screen);
        let forwarded = scene.tick(screen, events);

        timings.push(screen.busy().as_millis());
        if timings.len() >= 100 {
            timings.sort();
            let sum: u128 = timings.iter().sum();
            let avg = sum / timings.len() as u128;
            let min = timings[0];
            let max = timings[timings.len() - 1];
            let p50 = timings[timings.len() / 2];
            let p90 = timings[(timings.len() as f32 * 0.9) as usize];
            let p99 = timings[(timings.len() as f32 * 0.99) as usize];
            log::debug!("Tick timings:\n * min: {min}ms\n * max: {max}ms\n * avg: {avg}ms\n * p50: {p50}ms\n * p90: {p90}ms\n * p99: {p99}ms");
            log::debug!(
                "Power {}%, fan at {:.1}°",
                scene.regulator().power(),
                scene.fan().angle()
            );
            timings.clear();
        }

        if forwarded.contains(&InputEvent::Quit) {
            log::info!("Quit requested");
            break;
        }
    }
}
