use std::convert::Infallible;
use std::path::Path;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::{DrawTarget, Point, Size};

use crate::error::SurfaceError;
use crate::text;
use crate::texture::{Pivot, Texture};

/// The rendering capabilities a [`Scene`](crate::Scene) draws through.
///
/// Off-screen drawing goes straight to a [`Texture`], which is itself a
/// [`DrawTarget`]; blits always land on the screen. Texture creation defaults
/// to the software implementations and only needs overriding to observe it.
pub trait Backend {
    type Screen: DrawTarget<Color = Rgb888, Error = Infallible>;

    fn screen(&mut self) -> &mut Self::Screen;

    /// Blocks until the next frame slot and shows the composed screen.
    fn present(&mut self);

    fn create_target(&mut self, size: Size) -> Result<Texture, SurfaceError> {
        Texture::new(size)
    }

    fn load_image(&mut self, path: &Path) -> Result<Texture, SurfaceError> {
        Texture::open(path)
    }

    fn rasterize_text(&mut self, text: &str, color: Rgb888) -> Result<Texture, SurfaceError> {
        text::rasterize(text, color)
    }

    fn blit(&mut self, texture: &Texture, top_left: Point, angle: f64, pivot: Pivot) {
        texture
            .blit_onto(self.screen(), top_left, angle, pivot)
            .unwrap_or_else(|never| match never {});
    }
}
