//! Compile-time scene configuration.

use std::time::Duration;

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

pub const SCREEN_WIDTH: u32 = 1100;
pub const SCREEN_HEIGHT: u32 = 800;

pub const WINDOW_TITLE: &str = "Windmill";

/// Target period of one tick. The present call sleeps out the rest of it.
pub const FRAME_TIME: Duration = Duration::from_millis(16);

/// Full deflection of the regulator dial, in degrees.
pub const REGULATOR_MAX_ANGLE: f64 = 270.0;
/// Degrees applied per Up/Down key press.
pub const REGULATOR_TORQUE: f64 = 10.0;
pub const REGULATOR_AREA_WIDTH: u32 = 400;
pub const REGULATOR_AREA_HEIGHT: u32 = SCREEN_HEIGHT / 5 + 150;

/// Rotation pivot of the dial, relative to the regulator surface.
pub const REGULATOR_PIVOT: Point = Point::new(
    (REGULATOR_AREA_WIDTH / 2) as i32,
    (SCREEN_HEIGHT / 5) as i32,
);

/// Indicator square drawn on the dial; it orbits the pivot as the dial turns.
pub const REGULATOR_INDICATOR: Rectangle = Rectangle::new(
    Point::new(
        (REGULATOR_AREA_WIDTH / 4) as i32 - 10,
        (SCREEN_HEIGHT / 5) as i32 - 10,
    ),
    Size::new(20, 20),
);

/// Screen position of the regulator surface.
pub const REGULATOR_POSITION: Point = Point::new((SCREEN_WIDTH - REGULATOR_AREA_WIDTH) as i32, 0);

pub const WINDMILL_TOWER: Rectangle = Rectangle::new(
    Point::new((SCREEN_WIDTH / 3) as i32, (SCREEN_HEIGHT - 300) as i32),
    Size::new(50, 300),
);

/// Horizontal centre line shared by the prompts and the fan hub.
pub const FAN_AXIS_X: i32 = (SCREEN_WIDTH / 3) as i32;
/// Offset of the hub from the axis, half the tower width.
pub const FAN_HUB_OFFSET_X: i32 = 25;
/// Vertical position of the hub, just below the tower top.
pub const FAN_HUB_Y: i32 = (SCREEN_HEIGHT - 300 - 10) as i32;

pub const PROMPT_TOP: i32 = (SCREEN_HEIGHT / 6) as i32;
pub const PROMPT_GAP: i32 = 10;
pub const PROMPTS: [&str; 2] = ["Use Up button to speed up", "Use Down button to speed down"];

/// Degrees the fan turns per tick for each point of power.
pub const FAN_DEGREES_PER_POWER: f64 = 1.0 / 8.0;

const DEFAULT_FAN_IMAGE: &str = "assets/wind_fan.png";

/// Path of the fan image, relative to the working directory unless overridden
/// at build time with `WINDMILL_FAN_IMAGE`.
pub const FAN_IMAGE_PATH: &str = match option_env!("WINDMILL_FAN_IMAGE") {
    Some(path) => path,
    None => DEFAULT_FAN_IMAGE,
};
