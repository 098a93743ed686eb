use std::path::Path;

use animations::FanState;
use color::{BACKGROUND, PROMPT, REGULATOR, WINDMILL_BODY};
use config::{
    FAN_AXIS_X, FAN_HUB_OFFSET_X, FAN_HUB_Y, PROMPTS, PROMPT_GAP, PROMPT_TOP, REGULATOR_AREA_HEIGHT,
    REGULATOR_AREA_WIDTH, REGULATOR_INDICATOR, REGULATOR_PIVOT, REGULATOR_POSITION, SCREEN_HEIGHT,
    SCREEN_WIDTH, WINDMILL_TOWER,
};
use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::{DrawTarget, Primitive, Size},
    primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment},
    Drawable,
};
use regulator::RegulatorState;

pub mod animations;
pub mod backend;
pub mod color;
pub mod config;
pub mod error;
pub mod input;
pub mod regulator;
pub mod surface;
pub mod text;
pub mod texture;

#[cfg(test)]
mod testing;

pub use backend::Backend;
pub use error::{LoadError, SurfaceError, SurfaceKind};
pub use input::{EventSource, InputEvent, Key, ScriptedInput};
pub use surface::Surface;
pub use texture::{Pivot, Texture};

/// Everything one run of the simulation owns: the dial, the fan and the
/// surfaces they are drawn with.
pub struct Scene {
    regulator: RegulatorState,
    fan: FanState,
    windmill: Surface,
    dial: Surface,
    wind_fan: Surface,
    prompts: [Surface; 2],
    power_readout: Surface,
}

impl Scene {
    /// Creates every surface and draws the static ones.
    ///
    /// All surfaces are attempted even after a failure, so the error reports
    /// everything that is missing at once.
    pub fn load<B: Backend>(backend: &mut B, fan_image: &Path) -> Result<Self, LoadError> {
        let mut failures = Vec::new();
        let mut check = |kind: SurfaceKind, result: Result<Surface, SurfaceError>| match result {
            Ok(surface) => {
                log::info!("Created {kind} surface ({}x{})", surface.width(), surface.height());
                Some(surface)
            }
            Err(err) => {
                log::error!("Failed to create {kind} surface: {err}");
                failures.push((kind, err));
                None
            }
        };

        let windmill = check(
            SurfaceKind::Windmill,
            Surface::blank(backend, Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
        );
        let dial = check(
            SurfaceKind::Regulator,
            Surface::blank(backend, Size::new(REGULATOR_AREA_WIDTH, REGULATOR_AREA_HEIGHT)),
        );
        let wind_fan = check(SurfaceKind::WindFan, Surface::from_image(backend, fan_image));
        let first_prompt = check(
            SurfaceKind::Prompt(0),
            Surface::from_text(backend, PROMPTS[0], PROMPT),
        );
        let second_prompt = check(
            SurfaceKind::Prompt(1),
            Surface::from_text(backend, PROMPTS[1], PROMPT),
        );
        let power_readout = check(
            SurfaceKind::PowerReadout,
            Surface::from_text(backend, "0", REGULATOR),
        );

        let (
            Some(windmill),
            Some(dial),
            Some(wind_fan),
            Some(first_prompt),
            Some(second_prompt),
            Some(power_readout),
        ) = (windmill, dial, wind_fan, first_prompt, second_prompt, power_readout)
        else {
            return Err(LoadError { failures });
        };

        let mut scene = Self {
            regulator: RegulatorState::new(),
            fan: FanState::new(),
            windmill,
            dial,
            wind_fan,
            prompts: [first_prompt, second_prompt],
            power_readout,
        };
        scene.redraw_static();
        Ok(scene)
    }

    /// Draws the windmill tower and the dial indicator into their off-screen
    /// surfaces. Neither depends on any state, so this runs once at load; the
    /// dial turns by being blitted rotated.
    pub fn redraw_static(&mut self) {
        if let Some(target) = self.windmill.target() {
            draw_outlined(target, WINDMILL_TOWER, WINDMILL_BODY);
        }
        if let Some(target) = self.dial.target() {
            draw_outlined(target, REGULATOR_INDICATOR, REGULATOR);
        }
    }

    /// One tick: applies the queued input, composes and presents a frame.
    ///
    /// Returns the events the regulator did not consume, Quit among them.
    pub fn tick<B, I>(&mut self, backend: &mut B, events: I) -> Vec<InputEvent>
    where
        B: Backend,
        I: IntoIterator<Item = InputEvent>,
    {
        let forwarded = input::translate(&mut self.regulator, events);
        self.render(backend);
        forwarded
    }

    /// Composes a frame back to front and presents it.
    ///
    /// The fan is advanced with the power the regulator holds once the readout
    /// step ran: derived this tick if the dial moved, otherwise the last value.
    pub fn render<B: Backend>(&mut self, backend: &mut B) {
        self.windmill.render(backend, 0, 0, 0.0, Pivot::Center);
        self.dial.render(
            backend,
            REGULATOR_POSITION.x,
            REGULATOR_POSITION.y,
            self.regulator.angle(),
            Pivot::At(REGULATOR_PIVOT),
        );

        if self.regulator.changed() {
            let power = self.regulator.derive_power();
            if let Err(err) = self
                .power_readout
                .replace_text(backend, &power.to_string(), REGULATOR)
            {
                log::error!("Failed to regenerate power readout for {power}: {err}");
            }
        }

        // Centred on the dial pivot.
        let readout_x = REGULATOR_POSITION.x + REGULATOR_PIVOT.x - self.power_readout.width() / 2;
        let readout_y = REGULATOR_POSITION.y + REGULATOR_PIVOT.y - self.power_readout.height() / 2;
        self.power_readout
            .render(backend, readout_x, readout_y, 0.0, Pivot::Center);

        let [first, second] = &mut self.prompts;
        first.render(backend, FAN_AXIS_X - first.width() / 2, PROMPT_TOP, 0.0, Pivot::Center);
        let below = first.area().top_left.y + first.height() + PROMPT_GAP;
        second.render(backend, FAN_AXIS_X - second.width() / 2, below, 0.0, Pivot::Center);

        self.fan.advance(self.regulator.power());
        let fan_x = FAN_AXIS_X - self.wind_fan.width() / 2 + FAN_HUB_OFFSET_X;
        let fan_y = FAN_HUB_Y - self.wind_fan.height() / 2;
        self.wind_fan
            .render(backend, fan_x, fan_y, self.fan.angle(), Pivot::Center);

        backend.present();
    }

    pub fn regulator(&self) -> &RegulatorState {
        &self.regulator
    }

    pub fn fan(&self) -> &FanState {
        &self.fan
    }

    pub fn power_readout(&self) -> &Surface {
        &self.power_readout
    }
}

fn outlined(color: Rgb888) -> PrimitiveStyle<Rgb888> {
    PrimitiveStyleBuilder::new()
        .fill_color(color)
        .stroke_color(color)
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .build()
}

/// Clears `target` to the background and draws a filled, outlined rectangle.
fn draw_outlined(target: &mut Texture, rect: Rectangle, color: Rgb888) {
    target
        .clear(BACKGROUND)
        .unwrap_or_else(|never| match never {});
    rect.into_styled(outlined(color))
        .draw(target)
        .unwrap_or_else(|never| match never {});
}
