//! Padded 128x250 canvas
//!
//! Pixels are packed vertical-LSB: each storage byte holds eight vertically
//! adjacent pixels of one column, row `y` at bit `y % 8`. A set bit is black
//! ([`BinaryColor::On`]).
//!
//! ```
//! use embedded_graphics_core::{geometry::Point, image::GetPixel, pixelcolor::BinaryColor};
//! use ssd1675b::FrameBuffer;
//!
//! let mut frame = FrameBuffer::new();
//! frame.set_pixel(3, 9, BinaryColor::On);
//! assert_eq!(frame.pixel(Point::new(3, 9)), Some(BinaryColor::On));
//! assert_eq!(frame.pixel(Point::new(4, 9)), Some(BinaryColor::Off));
//! ```

use core::convert::Infallible;

use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    image::GetPixel,
    pixelcolor::BinaryColor,
    primitives::Rectangle,
};

use crate::{HEIGHT, RAM_WIDTH};

const BYTE_ROWS: usize = HEIGHT.div_ceil(8);

/// Bytes of storage behind a [`FrameBuffer`]
pub const CANVAS_BYTES: usize = RAM_WIDTH * BYTE_ROWS;

/// Canvas covering the full controller RAM, padding columns included
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    buffer: [u8; CANVAS_BYTES],
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FrameBuffer({RAM_WIDTH}x{HEIGHT})")
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// All-white canvas
    pub const fn new() -> Self {
        Self {
            buffer: [0; CANVAS_BYTES],
        }
    }

    /// Canvas bounds, 0,0 to 128x250
    pub fn bounding_box() -> Rectangle {
        Rectangle::new(
            Point::zero(),
            Size::new(RAM_WIDTH as u32, HEIGHT as u32),
        )
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: BinaryColor) {
        match color {
            BinaryColor::Off => self.buffer.fill(0x00),
            BinaryColor::On => {
                self.buffer.fill(0xFF);
                // keep the rows past HEIGHT in the last byte row clear
                let tail = HEIGHT % 8;
                if tail != 0 {
                    let mask = (1u8 << tail) - 1;
                    for byte in &mut self.buffer[(BYTE_ROWS - 1) * RAM_WIDTH..] {
                        *byte = mask;
                    }
                }
            }
        }
    }

    fn location(x: usize, y: usize) -> (usize, u8) {
        ((y / 8) * RAM_WIDTH + x, 1 << (y % 8))
    }

    /// Set one pixel, ignored outside the canvas
    pub fn set_pixel(&mut self, x: usize, y: usize, color: BinaryColor) {
        if x >= RAM_WIDTH || y >= HEIGHT {
            return;
        }
        let (index, bit) = Self::location(x, y);
        match color {
            BinaryColor::On => self.buffer[index] |= bit,
            BinaryColor::Off => self.buffer[index] &= !bit,
        }
    }

    /// Whether the pixel is black, `false` outside the canvas
    pub fn is_black(&self, x: usize, y: usize) -> bool {
        if x >= RAM_WIDTH || y >= HEIGHT {
            return false;
        }
        let (index, bit) = Self::location(x, y);
        self.buffer[index] & bit != 0
    }

    /// Copy `src` into `dst`, replacing what is there.
    ///
    /// `origin` is the source point that lands on `dst.top_left`. The
    /// destination is clipped to the canvas, and canvas pixels for which the
    /// source has no pixel are left alone.
    pub fn composite<S>(&mut self, dst: Rectangle, src: &S, origin: Point)
    where
        S: GetPixel<Color = BinaryColor> + ?Sized,
    {
        let area = dst.intersection(&Self::bounding_box());
        if area.is_zero_sized() {
            return;
        }
        let offset = origin - dst.top_left;
        let left = area.top_left.x;
        let top = area.top_left.y;
        for y in top..top + area.size.height as i32 {
            for x in left..left + area.size.width as i32 {
                let p = Point::new(x, y);
                if let Some(color) = src.pixel(p + offset) {
                    self.set_pixel(x as usize, y as usize, color);
                }
            }
        }
    }
}

impl GetPixel for FrameBuffer {
    type Color = BinaryColor;

    fn pixel(&self, p: Point) -> Option<Self::Color> {
        if p.x < 0 || p.y < 0 || p.x as usize >= RAM_WIDTH || p.y as usize >= HEIGHT {
            return None;
        }
        Some(BinaryColor::from(self.is_black(p.x as usize, p.y as usize)))
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Self::bounding_box().size
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x >= 0 && y >= 0 {
                self.set_pixel(x as usize, y as usize, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

/// Source image with the same color everywhere
///
/// `Uniform(BinaryColor::Off)` is a white sheet of unbounded size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Uniform(pub BinaryColor);

impl GetPixel for Uniform {
    type Color = BinaryColor;

    fn pixel(&self, _p: Point) -> Option<Self::Color> {
        Some(self.0)
    }
}
