use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::RgbColor;

pub const BACKGROUND: Rgb888 = Rgb888::WHITE;
pub const WINDMILL_BODY: Rgb888 = Rgb888::new(150, 150, 150);
pub const REGULATOR: Rgb888 = Rgb888::BLACK;
pub const PROMPT: Rgb888 = Rgb888::BLACK;

/// Alpha below which a decoded pixel is treated as fully transparent.
const ALPHA_CUTOFF: u8 = 128;

/// Converts a straight-alpha RGBA pixel into a texture pixel.
///
/// Textures have no partial transparency: a pixel is either opaque or a hole.
pub fn rgba_to_pixel(r: u8, g: u8, b: u8, a: u8) -> Option<Rgb888> {
    if a < ALPHA_CUTOFF {
        return None;
    }
    Some(Rgb888::new(r, g, b))
}
