use std::path::Path;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::{OriginDimensions, Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::backend::Backend;
use crate::error::SurfaceError;
use crate::texture::{Pivot, Texture};

/// A texture together with the rectangle it was last drawn to.
///
/// The size is fixed by whatever created the texture; the position is set by
/// every [`Surface::render`] call.
#[derive(Debug)]
pub struct Surface {
    texture: Option<Texture>,
    area: Rectangle,
}

impl Surface {
    fn with_texture(texture: Texture) -> Self {
        let area = Rectangle::new(Point::zero(), texture.size());
        Self {
            texture: Some(texture),
            area,
        }
    }

    /// An off-screen render target.
    pub fn blank<B: Backend>(backend: &mut B, size: Size) -> Result<Self, SurfaceError> {
        backend.create_target(size).map(Self::with_texture)
    }

    pub fn from_image<B: Backend>(backend: &mut B, path: &Path) -> Result<Self, SurfaceError> {
        backend.load_image(path).map(Self::with_texture)
    }

    pub fn from_text<B: Backend>(
        backend: &mut B,
        text: &str,
        color: Rgb888,
    ) -> Result<Self, SurfaceError> {
        backend.rasterize_text(text, color).map(Self::with_texture)
    }

    /// Replaces the texture with freshly rasterized text.
    ///
    /// On failure the current texture and area are kept as they were.
    pub fn replace_text<B: Backend>(
        &mut self,
        backend: &mut B,
        text: &str,
        color: Rgb888,
    ) -> Result<(), SurfaceError> {
        let texture = backend.rasterize_text(text, color)?;
        *self = Self::with_texture(texture);
        Ok(())
    }

    /// Blits the texture with its top left corner at `(x, y)`, turned clockwise
    /// by `angle` degrees around `pivot`. Does nothing once released.
    pub fn render<B: Backend>(&mut self, backend: &mut B, x: i32, y: i32, angle: f64, pivot: Pivot) {
        self.area.top_left = Point::new(x, y);
        if let Some(texture) = &self.texture {
            backend.blit(texture, self.area.top_left, angle, pivot);
        }
    }

    /// Drops the texture. The area collapses to zero.
    pub fn release(&mut self) {
        self.texture = None;
        self.area = Rectangle::zero();
    }

    pub fn is_loaded(&self) -> bool {
        self.texture.is_some()
    }

    pub fn area(&self) -> Rectangle {
        self.area
    }

    pub fn width(&self) -> i32 {
        self.area.size.width as i32
    }

    pub fn height(&self) -> i32 {
        self.area.size.height as i32
    }

    /// The texture as an off-screen draw target.
    pub fn target(&mut self) -> Option<&mut Texture> {
        self.texture.as_mut()
    }

    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }
}
