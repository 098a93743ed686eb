use std::io;
use std::path::Path;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::backend::Backend;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::SurfaceError;
use crate::text;
use crate::texture::{Pivot, Texture};

pub const FAN_IMAGE_SIZE: Size = Size::new(64, 48);

#[derive(Debug, Clone, PartialEq)]
pub struct Blit {
    pub area: Rectangle,
    pub angle: f64,
    pub pivot: Pivot,
}

/// Draws like a real backend, but remembers every rasterization and blit and
/// can be told to fail texture creation.
pub struct RecordingBackend {
    pub screen: Texture,
    pub blits: Vec<Blit>,
    pub rasterized: Vec<String>,
    pub presents: usize,
    pub fail_text: bool,
    pub fail_image: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            screen: Texture::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)).unwrap(),
            blits: Vec::new(),
            rasterized: Vec::new(),
            presents: 0,
            fail_text: false,
            fail_image: false,
        }
    }

    /// Forgets what was recorded so far.
    pub fn reset(&mut self) {
        self.blits.clear();
        self.rasterized.clear();
        self.presents = 0;
    }
}

impl Backend for RecordingBackend {
    type Screen = Texture;

    fn screen(&mut self) -> &mut Texture {
        &mut self.screen
    }

    fn present(&mut self) {
        self.presents += 1;
    }

    fn load_image(&mut self, path: &Path) -> Result<Texture, SurfaceError> {
        if self.fail_image {
            return Err(SurfaceError::Image {
                path: path.to_path_buf(),
                source: image::ImageError::IoError(io::Error::new(
                    io::ErrorKind::NotFound,
                    "no such file",
                )),
            });
        }
        let mut texture = Texture::new(FAN_IMAGE_SIZE)?;
        texture.clear(Rgb888::new(90, 90, 200)).unwrap();
        Ok(texture)
    }

    fn rasterize_text(&mut self, text: &str, color: Rgb888) -> Result<Texture, SurfaceError> {
        if self.fail_text {
            return Err(SurfaceError::EmptyText);
        }
        self.rasterized.push(text.to_owned());
        text::rasterize(text, color)
    }

    fn blit(&mut self, texture: &Texture, top_left: Point, angle: f64, pivot: Pivot) {
        self.blits.push(Blit {
            area: Rectangle::new(top_left, texture.size()),
            angle,
            pivot,
        });
        texture
            .blit_onto(&mut self.screen, top_left, angle, pivot)
            .unwrap();
    }
}
