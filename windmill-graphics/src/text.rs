use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::{Dimensions, Point};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::Drawable;
use profont::PROFONT_24_POINT;

use crate::error::SurfaceError;
use crate::texture::Texture;

/// Renders a single line of text into a tightly sized texture with a
/// transparent background.
pub fn rasterize(text: &str, color: Rgb888) -> Result<Texture, SurfaceError> {
    if text.is_empty() {
        return Err(SurfaceError::EmptyText);
    }

    let style = MonoTextStyle::new(&PROFONT_24_POINT, color);
    let text = Text::with_baseline(text, Point::zero(), style, Baseline::Top);
    let mut texture = Texture::new(text.bounding_box().size)?;
    text.draw(&mut texture).unwrap_or_else(|never| match never {});
    Ok(texture)
}
