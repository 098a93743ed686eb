use std::convert::Infallible;
use std::path::Path;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::{Dimensions, DrawTarget, OriginDimensions, Point, Size};
use embedded_graphics::Pixel;

use crate::color::rgba_to_pixel;
use crate::error::SurfaceError;

/// Where a rotated blit turns, relative to the blitted texture's top left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pivot {
    Center,
    At(Point),
}

impl Pivot {
    fn resolve(self, size: Size) -> (f64, f64) {
        match self {
            Pivot::Center => (size.width as f64 / 2.0, size.height as f64 / 2.0),
            Pivot::At(point) => (point.x as f64, point.y as f64),
        }
    }
}

/// A software image: an off-screen render target and a blit source.
///
/// Pixels are either opaque or transparent (`None`). Drawing through the
/// [`DrawTarget`] impl never fails; pixels outside the texture are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    size: Size,
    pixels: Vec<Option<Rgb888>>,
}

impl Texture {
    /// A fully transparent texture.
    pub fn new(size: Size) -> Result<Self, SurfaceError> {
        if size.width == 0 || size.height == 0 {
            return Err(SurfaceError::EmptyTexture {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self {
            size,
            pixels: vec![None; (size.width * size.height) as usize],
        })
    }

    /// Decodes an image file. Pixels with low alpha become transparent.
    pub fn open(path: &Path) -> Result<Self, SurfaceError> {
        let image = image::open(path)
            .map_err(|source| SurfaceError::Image {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();

        let mut texture = Self::new(Size::new(image.width(), image.height()))?;
        for (slot, pixel) in texture.pixels.iter_mut().zip(image.pixels()) {
            let [r, g, b, a] = pixel.0;
            *slot = rgba_to_pixel(r, g, b, a);
        }
        Ok(texture)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb888> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.pixels[(y * self.size.width + x) as usize]
    }

    fn index(&self, point: Point) -> Option<usize> {
        let (x, y) = (u32::try_from(point.x).ok()?, u32::try_from(point.y).ok()?);
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some((y * self.size.width + x) as usize)
    }

    /// Copies the opaque pixels of this texture onto `target` with the top left
    /// corner at `top_left`, turned clockwise by `angle` degrees around `pivot`.
    ///
    /// Rotation samples the nearest source pixel for every destination pixel
    /// centre, so rotated output has no holes.
    pub fn blit_onto<D>(
        &self,
        target: &mut D,
        top_left: Point,
        angle: f64,
        pivot: Pivot,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        if angle.rem_euclid(360.0) == 0.0 {
            let width = self.size.width;
            let pixels = self.pixels.iter().enumerate().filter_map(|(i, pixel)| {
                let (x, y) = (i as u32 % width, i as u32 / width);
                pixel.map(|color| Pixel(top_left + Point::new(x as i32, y as i32), color))
            });
            return target.draw_iter(pixels);
        }

        let (pivot_x, pivot_y) = pivot.resolve(self.size);
        let origin_x = top_left.x as f64 + pivot_x;
        let origin_y = top_left.y as f64 + pivot_y;
        let (sin, cos) = angle.to_radians().sin_cos();

        // Screen-space bounds of the rotated texture, clipped to the target.
        let (width, height) = (self.size.width as f64, self.size.height as f64);
        let corners = [(0.0, 0.0), (width, 0.0), (0.0, height), (width, height)].map(|(x, y)| {
            let (dx, dy) = (x - pivot_x, y - pivot_y);
            (origin_x + cos * dx - sin * dy, origin_y + sin * dx + cos * dy)
        });
        let bounds = target.bounding_box();
        let Some(bottom_right) = bounds.bottom_right() else {
            return Ok(());
        };
        let min_x = corners.iter().map(|c| c.0).fold(f64::INFINITY, f64::min).floor() as i32;
        let max_x = corners.iter().map(|c| c.0).fold(f64::NEG_INFINITY, f64::max).ceil() as i32;
        let min_y = corners.iter().map(|c| c.1).fold(f64::INFINITY, f64::min).floor() as i32;
        let max_y = corners.iter().map(|c| c.1).fold(f64::NEG_INFINITY, f64::max).ceil() as i32;
        let (min_x, max_x) = (min_x.max(bounds.top_left.x), max_x.min(bottom_right.x));
        let (min_y, max_y) = (min_y.max(bounds.top_left.y), max_y.min(bottom_right.y));

        let pixels = (min_y..=max_y)
            .flat_map(|y| (min_x..=max_x).map(move |x| (x, y)))
            .filter_map(|(x, y)| {
                let dx = x as f64 + 0.5 - origin_x;
                let dy = y as f64 + 0.5 - origin_y;
                let source_x = cos * dx + sin * dy + pivot_x;
                let source_y = -sin * dx + cos * dy + pivot_y;
                if source_x < 0.0 || source_y < 0.0 {
                    return None;
                }
                self.pixel(source_x as u32, source_y as u32)
                    .map(|color| Pixel(Point::new(x, y), color))
            });
        target.draw_iter(pixels)
    }
}

impl OriginDimensions for Texture {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Texture {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(index) = self.index(point) {
                self.pixels[index] = Some(color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.pixels.fill(Some(color));
        Ok(())
    }
}
