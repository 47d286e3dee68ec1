//! Canvas to RAM stream encoding
//!
//! The controller fills each RAM row MSB first, and the panel's source lines
//! run right to left relative to the canvas. RAM bit `x` of a row (counting
//! from the MSB of the first byte) therefore carries canvas column
//! `RAM_WIDTH - 7 - x`. The six bits past the visible width wrap around to the
//! padding columns 122..128, so the mapping is its own inverse.
//!
//! In RAM a set bit is white and a cleared bit is black.
//!
//! ```
//! use embedded_graphics_core::pixelcolor::BinaryColor;
//! use ssd1675b::{FrameBuffer, encoder};
//!
//! let mut frame = FrameBuffer::new();
//! frame.set_pixel(0, 0, BinaryColor::On);
//!
//! // visible column 0 is RAM bit 121: byte 15, mask 0x40
//! let row = encoder::encode_row(&frame, 0);
//! assert_eq!(row[15], !0x40);
//! assert!(row[..15].iter().all(|&b| b == 0xFF));
//! ```

use embedded_graphics_core::pixelcolor::BinaryColor;

use crate::framebuffer::FrameBuffer;
use crate::{FRAME_BYTES, HEIGHT, RAM_WIDTH, ROW_BYTES};

/// Canvas column carried by RAM bit `bit` of a row.
///
/// Also maps a canvas column back to its RAM bit.
pub const fn mirror_column(bit: usize) -> usize {
    let column = (RAM_WIDTH as isize - 7 - bit as isize).rem_euclid(RAM_WIDTH as isize);
    column as usize
}

/// Encode canvas row `y` into the bytes the controller expects for that row.
pub fn encode_row(frame: &FrameBuffer, y: usize) -> [u8; ROW_BYTES] {
    let mut row = [0u8; ROW_BYTES];
    for x in 0..RAM_WIDTH {
        if !frame.is_black(mirror_column(x), y) {
            row[x / 8] |= 0x80 >> (x % 8);
        }
    }
    row
}

/// Encode every row top to bottom, handing each one to `sink`.
///
/// Stops at the first error returned by `sink`.
pub fn encode<F, E>(frame: &FrameBuffer, mut sink: F) -> Result<(), E>
where
    F: FnMut(&[u8; ROW_BYTES]) -> Result<(), E>,
{
    for y in 0..HEIGHT {
        sink(&encode_row(frame, y))?;
    }
    Ok(())
}

/// Rebuild a canvas from a RAM stream, the inverse of [`encode`].
///
/// Returns `None` unless `stream` is exactly [`FRAME_BYTES`] long.
pub fn decode(stream: &[u8]) -> Option<FrameBuffer> {
    if stream.len() != FRAME_BYTES {
        return None;
    }
    let mut frame = FrameBuffer::new();
    for (y, row) in stream.chunks_exact(ROW_BYTES).enumerate() {
        for x in 0..RAM_WIDTH {
            if row[x / 8] & (0x80 >> (x % 8)) == 0 {
                frame.set_pixel(mirror_column(x), y, BinaryColor::On);
            }
        }
    }
    Some(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_all(frame: &FrameBuffer) -> Vec<u8> {
        let mut out = Vec::new();
        encode::<_, ()>(frame, |row| {
            out.extend_from_slice(row);
            Ok(())
        })
        .unwrap();
        out
    }

    #[test]
    fn mirror_is_involution() {
        for x in 0..RAM_WIDTH {
            assert!(mirror_column(x) < RAM_WIDTH);
            assert_eq!(mirror_column(mirror_column(x)), x);
        }
        assert_eq!(mirror_column(0), 121);
        assert_eq!(mirror_column(121), 0);
        assert_eq!(mirror_column(122), 127);
        assert_eq!(mirror_column(127), 122);
    }

    #[test]
    fn white_frame_is_all_ones() {
        let out = encode_all(&FrameBuffer::new());
        assert_eq!(out.len(), FRAME_BYTES);
        assert!(out.iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn black_frame_is_all_zeros() {
        let mut frame = FrameBuffer::new();
        frame.fill(BinaryColor::On);
        let out = encode_all(&frame);
        assert_eq!(out.len(), FRAME_BYTES);
        assert!(out.iter().all(|&b| b == 0x00));
    }

    #[test]
    fn single_pixel_lands_on_mirrored_bit() {
        for &(x0, y0) in &[(0usize, 0usize), (1, 7), (7, 100), (8, 1), (60, 125), (121, 249)] {
            let mut frame = FrameBuffer::new();
            frame.set_pixel(x0, y0, BinaryColor::On);
            let out = encode_all(&frame);

            let bit = RAM_WIDTH - 7 - x0;
            let index = y0 * ROW_BYTES + bit / 8;
            let mask = 0x80u8 >> (bit % 8);
            for (i, &b) in out.iter().enumerate() {
                if i == index {
                    assert_eq!(b, !mask, "pixel ({x0}, {y0})");
                } else {
                    assert_eq!(b, 0xFF, "pixel ({x0}, {y0}) byte {i}");
                }
            }
            assert_eq!(decode(&out), Some(frame));
        }
    }

    #[test]
    fn natural_order_is_not_used() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(0, 0, BinaryColor::On);
        let row = encode_row(&frame, 0);
        // a left-to-right encoder would clear the MSB of byte 0
        assert_eq!(row[0], 0xFF);
        assert_eq!(row[15], 0b1011_1111);
    }

    #[test]
    fn round_trip_pattern() {
        let mut frame = FrameBuffer::new();
        for y in 0..HEIGHT {
            for x in 0..RAM_WIDTH {
                if (x * 7 + y * 3) % 5 == 0 {
                    frame.set_pixel(x, y, BinaryColor::On);
                }
            }
        }
        assert_eq!(decode(&encode_all(&frame)), Some(frame));
    }

    #[test]
    fn encode_stops_on_sink_error() {
        let mut rows = 0;
        let result = encode(&FrameBuffer::new(), |_| {
            rows += 1;
            if rows == 3 { Err("bus") } else { Ok(()) }
        });
        assert_eq!(result, Err("bus"));
        assert_eq!(rows, 3);
    }

    #[test]
    fn decode_rejects_short_stream() {
        assert_eq!(decode(&[0xFF; FRAME_BYTES - 1]), None);
    }
}
